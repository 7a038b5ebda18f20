use contact_scopes_lib::bootstrap::wiring::build_app_deps;
use contact_scopes_lib::commands;
use cs_app::UseCases;
use cs_core::{AppConfig, EntityTypeTag, ScopeState};
use cs_infra::db::pool::init_db_pool;
use cs_infra::scope_state::encode_scope_state;
use tempfile::TempDir;

async fn use_cases(dir: &TempDir) -> (AppConfig, UseCases) {
    let config = AppConfig::with_base_dir(dir.path().to_path_buf());
    std::fs::create_dir_all(&config.scope_state_dir).unwrap();
    init_db_pool(&config.database_path.to_string_lossy()).unwrap();
    let deps = build_app_deps(&config).await.unwrap();
    (config, UseCases::new(deps))
}

#[tokio::test]
async fn test_view_model_from_blob_file_keeps_stale_ids() {
    let dir = TempDir::new().unwrap();
    let (_config, use_cases) = use_cases(&dir).await;

    let blob_path = dir.path().join("adhoc.scope");
    let state = ScopeState::empty().with_ids(EntityTypeTag::Contact, vec![5, 6]);
    std::fs::write(&blob_path, encode_scope_state(&state).unwrap()).unwrap();

    let view_model = commands::view_model::run(&use_cases, "com.example.mail", Some(&blob_path))
        .await
        .unwrap();

    let contacts = view_model.get(EntityTypeTag::Contact).unwrap();
    assert_eq!(contacts.iter().map(|e| e.id).collect::<Vec<_>>(), vec![5, 6]);
    assert!(contacts.iter().all(|e| e.title.is_none() && e.detail.is_none()));
}

#[tokio::test]
async fn test_view_model_reads_stored_scope() {
    let dir = TempDir::new().unwrap();
    let (config, use_cases) = use_cases(&dir).await;

    let state = ScopeState::empty().with_ids(EntityTypeTag::Email, vec![9]);
    std::fs::write(
        config.scope_state_dir.join("com.example.mail.scope"),
        encode_scope_state(&state).unwrap(),
    )
    .unwrap();

    let view_model = commands::view_model::run(&use_cases, "com.example.mail", None)
        .await
        .unwrap();

    let json = serde_json::to_value(&view_model).unwrap();
    assert_eq!(json["3"][0]["id"], 9);
    assert!(json["3"][0]["summary"].is_null());
    assert!(json["3"][0]["detail_uri"].is_null());
}

#[tokio::test]
async fn test_missing_blob_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let (_config, use_cases) = use_cases(&dir).await;

    let err = commands::view_model::run(
        &use_cases,
        "com.example.mail",
        Some(&dir.path().join("missing.scope")),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("Failed to read scope blob"));
}

#[tokio::test]
async fn test_groups_on_empty_database() {
    let dir = TempDir::new().unwrap();
    let (_config, use_cases) = use_cases(&dir).await;

    assert!(commands::groups::run(&use_cases).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_resolve_fails_on_unknown_or_malformed_reference() {
    let dir = TempDir::new().unwrap();
    let (_config, use_cases) = use_cases(&dir).await;

    let missing = vec!["content://contacts/groups/1".to_string()];
    let malformed = vec!["not a reference".to_string()];

    assert!(commands::resolve::run(&use_cases, &missing).await.is_err());
    assert!(commands::resolve::run(&use_cases, &malformed).await.is_err());
}
