use super::*;

const SAMPLE: &str = r#"[
    {"id": "a", "name": "Alpha", "description": "first", "tech_stack": ["Rust"], "featured": false},
    {"id": "b", "name": "Beta", "description": "second", "tech_stack": ["Python", "FastAPI"],
     "github_url": "https://github.com/example/beta", "featured": true}
]"#;

#[test]
fn parse_apps_keeps_file_order() {
    let apps = parse_apps(SAMPLE).unwrap();
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].name, "Alpha");
    assert_eq!(apps[1].name, "Beta");
    assert!(apps[1].featured);
    assert_eq!(apps[1].github_url.as_deref(), Some("https://github.com/example/beta"));
}

#[test]
fn parse_apps_rejects_non_array() {
    let err = parse_apps(r#"{"name":"x"}"#).unwrap_err();
    assert!(matches!(err, AppsError::InvalidFormat(_)));
}

#[tokio::test]
async fn load_apps_reads_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(APPS_FILE), SAMPLE).unwrap();
    let apps = load_apps(dir.path()).await.unwrap();
    assert_eq!(apps.len(), 2);
}

#[tokio::test]
async fn load_apps_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_apps(dir.path()).await.unwrap_err();
    assert!(matches!(err, AppsError::NotFound(path) if path.ends_with(APPS_FILE)));
}

#[tokio::test]
async fn load_apps_garbage_is_invalid_format() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(APPS_FILE), "not json").unwrap();
    let err = load_apps(dir.path()).await.unwrap_err();
    assert!(matches!(err, AppsError::InvalidFormat(_)));
}
