use solvent_core::config::{ResolverConfig, CONFIG_FILE};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = ResolverConfig::default();
    assert!(config.target_platform.is_none());
    assert_eq!(config.catalog, "catalog.toml");
    assert!(config.solver.command.is_none());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = ResolverConfig::from_str("").unwrap();
    assert_eq!(config.catalog, "catalog.toml");
    assert!(config.solver.args.is_empty());
}

#[test]
fn test_parse_from_toml() {
    let toml = r#"
target-platform = "cap-5.8"
catalog = "packages/catalog.toml"

[solver]
command = "p2cudf"
args = ["--format", "toml"]

[solver.env]
SOLVER_TIMEOUT = "30"
"#;
    let config = ResolverConfig::from_str(toml).unwrap();
    assert_eq!(config.target_platform.as_deref(), Some("cap-5.8"));
    assert_eq!(config.catalog, "packages/catalog.toml");
    assert_eq!(config.solver.command.as_deref(), Some("p2cudf"));
    assert_eq!(config.solver.args, vec!["--format", "toml"]);
    assert_eq!(config.solver.env.get("SOLVER_TIMEOUT").unwrap(), "30");
}

#[test]
fn test_parse_error_mentions_file() {
    let err = ResolverConfig::from_str("catalog = [").unwrap_err();
    assert!(err.to_string().contains("Configuration error"), "got: {err}");
}

#[test]
fn test_discover_walks_up() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(CONFIG_FILE),
        "target-platform = \"cap-5.6\"\n",
    )
    .unwrap();
    let nested = tmp.path().join("deep").join("dir");
    std::fs::create_dir_all(&nested).unwrap();

    let (config, root) = ResolverConfig::discover(&nested).unwrap();
    assert_eq!(config.target_platform.as_deref(), Some("cap-5.6"));
    assert_eq!(root, tmp.path());
    assert_eq!(config.catalog_path(&root), tmp.path().join("catalog.toml"));
}

#[test]
fn test_discover_without_file_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    let (config, root) = ResolverConfig::discover(tmp.path()).unwrap();
    assert!(config.target_platform.is_none());
    assert_eq!(root, tmp.path());
}
