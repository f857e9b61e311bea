use std::fs;
use std::path::Path;

use solvent_core::dependency::PackageDependency;
use solvent_core::request::Request;
use solvent_ops::context::{load_request, ContextOptions, ResolveContext};
use solvent_ops::ops_emit::{self, EmitResult};
use solvent_ops::{ops_reconcile, ops_universe, render_plan};
use tempfile::TempDir;

const CATALOG: &str = r#"
[[package]]
name = "lib"
version = "1.0"
installed = true
local = true

[[package]]
name = "lib"
version = "2.0"

[[package]]
name = "app"
version = "1.0"
dependencies = ["lib:2.0"]

[[package]]
name = "tool"
version = "0.1"
target-platforms = ["cap-6.*"]
"#;

fn project(config: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("solvent.toml"), config).unwrap();
    fs::write(tmp.path().join("catalog.toml"), CATALOG).unwrap();
    tmp
}

fn load(dir: &Path) -> ResolveContext {
    ResolveContext::load(dir, &ContextOptions::default()).unwrap()
}

#[test]
fn context_is_discovered_from_a_subdirectory() {
    let tmp = project("target-platform = \"cap-5.8\"\n");
    let nested = tmp.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    let ctx = load(&nested);
    assert_eq!(ctx.config.target_platform.as_deref(), Some("cap-5.8"));
    assert_eq!(ctx.root, tmp.path());
    assert_eq!(ctx.catalog.len(), 4);
}

#[test]
fn command_line_overrides_win() {
    let tmp = project("target-platform = \"cap-5.8\"\n");
    fs::write(tmp.path().join("other.toml"), "[[package]]\nname = \"x\"\nversion = \"1\"\n").unwrap();
    let opts = ContextOptions {
        catalog: Some("other.toml".into()),
        target_platform: Some("cap-6.0".to_string()),
        ..Default::default()
    };
    let ctx = ResolveContext::load(tmp.path(), &opts).unwrap();
    assert_eq!(ctx.config.target_platform.as_deref(), Some("cap-6.0"));
    assert_eq!(ctx.catalog.len(), 1);
}

#[test]
fn missing_catalog_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = ResolveContext::load(tmp.path(), &ContextOptions::default()).unwrap_err();
    assert!(err.to_string().contains("Catalog error"), "{err}");
}

#[test]
fn universe_listing_marks_installed_packages() {
    let tmp = project("target-platform = \"cap-5.8\"\n");
    let universe = ops_universe::universe(&load(tmp.path())).unwrap();
    let listing = ops_universe::render(&universe);
    assert_eq!(listing, "app 1.0 -> 1\nlib 1.0 -> 1 *\nlib 2.0 -> 2\n");
}

#[test]
fn emit_writes_the_problem_file() {
    let tmp = project("");
    let ctx = load(tmp.path());
    let request = Request::new().install(PackageDependency::any("app"));
    let output = tmp.path().join("out/problem.cudf");

    match ops_emit::emit(&ctx, Some(&request), Some(&output)).unwrap() {
        EmitResult::Written(path, stanzas) => {
            assert_eq!(path, output);
            assert_eq!(stanzas, 4);
        }
        EmitResult::Text(_) => panic!("expected a written file"),
    }
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("package: app\nversion: 1\ninstalled: false\ndepends: lib >= 2\n"));
    assert!(text.ends_with("request:\ninstall: app\nremove: \nupgrade: \n"));
}

#[test]
fn request_file_is_loaded_relative_to_cwd() {
    let tmp = project("");
    fs::write(tmp.path().join("request.toml"), "upgrade = [\"lib\"]\n").unwrap();
    let request = load_request(tmp.path(), Some(Path::new("request.toml")))
        .unwrap()
        .unwrap();
    assert_eq!(request.upgrade, vec![PackageDependency::any("lib")]);
    assert!(load_request(tmp.path(), None).unwrap().is_none());
}

#[test]
fn reconcile_orders_dependencies_first() {
    let tmp = project("");
    let answer = tmp.path().join("answer.toml");
    fs::write(
        &answer,
        r#"
[[selected]]
package = "app"
version = 1

[[selected]]
package = "lib"
version = 2

[classification]
new = ["app"]
version-changed = ["lib"]
"#,
    )
    .unwrap();

    let plan = ops_reconcile::reconcile(&load(tmp.path()), &answer).unwrap();
    let ids: Vec<String> = plan.additions().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["lib-2.0", "app-1.0"]);

    let text = render_plan(&plan, false).unwrap();
    assert_eq!(text, "Install (2):\n  lib 2.0 (forced)\n  app 1.0 (forced)");

    let json: serde_json::Value = serde_json::from_str(&render_plan(&plan, true).unwrap()).unwrap();
    assert_eq!(json["state"], "success");
    assert_eq!(json["additions"][0]["version"], "2.0");
}

#[test]
fn unsatisfiable_answer_fails_reconcile() {
    let tmp = project("");
    let answer = tmp.path().join("answer.toml");
    fs::write(&answer, "satisfiable = false\n").unwrap();
    let err = ops_reconcile::reconcile(&load(tmp.path()), &answer).unwrap_err();
    assert_eq!(err.to_string(), "No solution found.");
}

#[test]
fn resolve_without_solver_command_is_a_config_error() {
    let tmp = project("");
    let err = solvent_ops::ops_resolve::resolve(&load(tmp.path()), &Request::new()).unwrap_err();
    assert!(err.to_string().contains("no solver configured"), "{err}");
}

#[cfg(unix)]
#[test]
fn resolve_runs_the_configured_solver() {
    let config = r#"
[solver]
command = "sh"
args = ["-c", "cat > problem.cudf; cat answer.toml"]
"#;
    let tmp = project(config);
    fs::write(
        tmp.path().join("answer.toml"),
        "[[selected]]\npackage = \"lib\"\nversion = 2\n\n[classification]\nversion-changed = [\"lib\"]\n",
    )
    .unwrap();

    let request = Request::new().upgrade(PackageDependency::any("lib"));
    let plan = solvent_ops::ops_resolve::resolve(&load(tmp.path()), &request).unwrap();
    assert_eq!(plan.additions().len(), 1);
    assert_eq!(plan.additions()[0].id(), "lib-2.0");

    let problem = fs::read_to_string(tmp.path().join("problem.cudf")).unwrap();
    assert!(problem.ends_with("upgrade: lib\n"));
}
