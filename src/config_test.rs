use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    SiteConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_matches_default() {
    assert_eq!(config_from(&[]).unwrap(), SiteConfig::default());
}

#[test]
fn database_url_selects_postgres() {
    let cfg = config_from(&[("DATABASE_URL", "postgres://u@h/db"), ("DB_MAX_CONNECTIONS", "9")]).unwrap();
    assert_eq!(cfg.backend, Backend::Postgres { database_url: "postgres://u@h/db".into(), max_connections: 9 });
    assert_eq!(cfg.backend.name(), "postgres");
}

#[test]
fn explicit_memory_backend_ignores_database_url() {
    let cfg = config_from(&[
        ("CONTENT_BACKEND", "memory"),
        ("DATABASE_URL", "postgres://u@h/db"),
        ("CONTENT_SEED_PATH", "content/seed.yaml"),
    ])
    .unwrap();
    assert_eq!(cfg.backend, Backend::Memory { seed_path: Some(PathBuf::from("content/seed.yaml")) });
}

#[test]
fn firestore_requires_project_id() {
    assert_eq!(config_from(&[("CONTENT_BACKEND", "firestore")]), Err(ConfigError::Missing("FIRESTORE_PROJECT_ID")));

    let cfg = config_from(&[
        ("CONTENT_BACKEND", "Firestore"),
        ("FIRESTORE_PROJECT_ID", "folio"),
        ("FIRESTORE_BASE_URL", "http://127.0.0.1:8080/v1/"),
    ])
    .unwrap();
    assert_eq!(
        cfg.backend,
        Backend::Firestore { project_id: "folio".into(), api_key: None, base_url: "http://127.0.0.1:8080/v1".into() }
    );
}

#[test]
fn postgres_requires_database_url() {
    assert_eq!(config_from(&[("CONTENT_BACKEND", "postgres")]), Err(ConfigError::Missing("DATABASE_URL")));
}

#[test]
fn unknown_backend_is_an_error() {
    assert_eq!(config_from(&[("CONTENT_BACKEND", "mongo")]), Err(ConfigError::UnknownBackend("mongo".into())));
}

#[test]
fn invalid_port_is_an_error() {
    assert!(matches!(config_from(&[("PORT", "http")]), Err(ConfigError::Invalid { key: "PORT", .. })));
}

#[test]
fn tuning_values_fall_back_when_unparseable() {
    let cfg = config_from(&[
        ("CONTENT_FETCH_TIMEOUT_MS", "soon"),
        ("PROJECTS_PER_PAGE", "0"),
        ("IMAGE_PROXY_TIMEOUT_SECS", "3"),
    ])
    .unwrap();
    assert_eq!(cfg.fetch_timeout, Duration::from_millis(DEFAULT_CONTENT_FETCH_TIMEOUT_MS));
    assert_eq!(cfg.projects_per_page, 1);
    assert_eq!(cfg.image_proxy_timeout, Duration::from_secs(3));
}

#[test]
fn allowed_hosts_are_comma_separated() {
    let cfg = config_from(&[("IMAGE_ALLOWED_HOSTS", "cdn.example.com, **.example.org ,,")]).unwrap();
    assert_eq!(cfg.image_allowed_hosts, vec!["cdn.example.com".to_owned(), "**.example.org".to_owned()]);
}

#[test]
fn plain_http_images_need_explicit_opt_in() {
    assert!(!config_from(&[]).unwrap().image_allow_http);
    assert!(!config_from(&[("IMAGE_PROXY_ALLOW_HTTP", "yes")]).unwrap().image_allow_http);
    assert!(config_from(&[("IMAGE_PROXY_ALLOW_HTTP", "true")]).unwrap().image_allow_http);
}
