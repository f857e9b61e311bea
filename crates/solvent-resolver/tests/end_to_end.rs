use solvent_core::catalog::Catalog;
use solvent_core::dependency::PackageDependency;
use solvent_core::platform::DeclaredPlatforms;
use solvent_core::request::Request;
use solvent_core::version::Version;
use solvent_resolver::compile::{compile, MissingPolicy};
use solvent_resolver::emit::emit_problem;
use solvent_resolver::reconcile::reconcile;
use solvent_resolver::solution::{Classification, Criterion, SelectedUnit, SolverOutcome};
use solvent_resolver::universe::Universe;
use solvent_util::errors::SolventError;

const CATALOG: &str = r#"
[[package]]
name = "A"
version = "2.0"

[[package]]
name = "A"
version = "1.0"
installed = true
local = true

[[package]]
name = "A"
version = "1.1"

[[package]]
name = "B"
version = "1.0"
dependencies = ["A:1.0:1.1", "missing-lib"]
conflicts = ["A:2.0:2.0"]

[[package]]
name = "C"
version = "1.0"
target-platforms = ["cap-6.*"]
"#;

fn universe(target_platform: Option<&str>) -> Universe {
    let catalog = Catalog::from_str(CATALOG).unwrap();
    Universe::build(&catalog, target_platform, &DeclaredPlatforms)
}

#[test]
fn ordinals_follow_versions() {
    let universe = universe(None);
    let ordinals: Vec<u32> = ["1.0", "1.1", "2.0"]
        .iter()
        .map(|v| universe.ordinal_of("A", &Version::parse(v)).unwrap())
        .collect();
    assert_eq!(ordinals, vec![1, 2, 3]);
}

#[test]
fn bounded_range_compiles_to_both_clauses() {
    let universe = universe(None);
    let refs = [PackageDependency::parse("A:1.0:1.1").unwrap()];
    assert_eq!(
        compile(&universe, &refs, MissingPolicy::Fail).unwrap(),
        "A >= 1, A <= 2"
    );
}

#[test]
fn problem_text_for_the_universe() {
    let universe = universe(None);
    let request = Request::new().upgrade(PackageDependency::any("A"));
    let text = emit_problem(&universe, Some(&request)).unwrap();

    assert!(text.starts_with("package: A\nversion: 1\ninstalled: true\n"));
    assert!(text.contains(
        "package: B\nversion: 1\ninstalled: false\ndepends: A >= 1, A <= 2\nconflicts: A = 3, B != 1\nprovides: \n\n"
    ));
    assert!(text.contains("package: C\n"));
    assert!(text.ends_with("request:\ninstall: \nremove: \nupgrade: A\n"));
}

#[test]
fn target_platform_hides_incompatible_remote_packages() {
    let universe = universe(Some("cap-5.8"));
    assert!(!universe.contains_name("C"));

    let request = Request::new().install(PackageDependency::any("C"));
    let err = emit_problem(&universe, Some(&request)).unwrap_err();
    match err {
        SolventError::UnmappedReference {
            reference,
            target_platform,
        } => {
            assert_eq!(reference, "C");
            assert_eq!(target_platform.as_deref(), Some("cap-5.8"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn version_change_becomes_a_single_forced_addition() {
    let universe = universe(None);
    let outcome = SolverOutcome::solved(
        vec![SelectedUnit::new("A", 3)],
        Classification::new().with(Criterion::VersionChanged, "A"),
    );
    let plan = reconcile(&universe, &outcome).unwrap();
    assert!(plan.is_success());
    assert!(plan.removals().is_empty());
    assert_eq!(plan.additions().len(), 1);
    let added = &plan.additions()[0];
    assert_eq!(added.name, "A");
    assert_eq!(added.version, Version::parse("2.0"));
    assert!(added.force);
}

#[test]
fn solver_answer_document_round_trip_through_reconcile() {
    let universe = universe(None);
    let outcome = SolverOutcome::from_toml(
        r#"
[[selected]]
package = "B"
version = 1

[[selected]]
package = "A"
version = 2

[classification]
new = ["B"]
version-changed = ["A"]
removed = ["A"]
"#,
    )
    .unwrap();
    let plan = reconcile(&universe, &outcome).unwrap();
    let removed: Vec<String> = plan.removals().iter().map(|c| c.id()).collect();
    let added: Vec<String> = plan.additions().iter().map(|c| c.id()).collect();
    assert_eq!(removed, vec!["A-1.0"]);
    assert_eq!(added, vec!["A-1.1", "B-1.0"]);
}

#[test]
fn unsatisfiable_answer_is_no_solution() {
    let universe = universe(None);
    let outcome = SolverOutcome::from_toml("satisfiable = false").unwrap();
    assert!(matches!(
        reconcile(&universe, &outcome),
        Err(SolventError::NoSolution)
    ));
}
