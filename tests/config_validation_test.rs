use user_api::config::{AppConfig, DatabaseSection, StoreBackendKind};
use user_api::storage::StoreConfig;

#[test]
fn postgres_backend_requires_url() {
    let config = AppConfig::default();

    let result = config.store_runtime();
    assert!(
        result.is_err(),
        "Expected postgres backend without a url to fail validation"
    );
}

#[test]
fn postgres_backend_trims_url() {
    let config = AppConfig {
        database: DatabaseSection {
            backend: StoreBackendKind::Postgres,
            url: " postgres://app@localhost/users ".into(),
        },
        ..Default::default()
    };

    let store = config
        .store_runtime()
        .expect("postgres configuration should be valid");

    match store {
        StoreConfig::Postgres { url } => assert_eq!(url, "postgres://app@localhost/users"),
        other => panic!("Unexpected store config: {other:?}"),
    }
}

#[test]
fn memory_backend_needs_no_url() {
    let config = AppConfig {
        database: DatabaseSection {
            backend: StoreBackendKind::Memory,
            url: String::new(),
        },
        ..Default::default()
    };

    assert!(matches!(
        config.store_runtime().expect("memory configuration should be valid"),
        StoreConfig::Memory
    ));
}
