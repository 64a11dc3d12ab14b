//! End-to-end tests for the property importer over a real repository layout

use std::collections::{BTreeMap, HashMap};
use std::error::Error as _;

use bomprops::adapters::maven::RepositoryChain;
use bomprops::adapters::pom::PomReader;
use bomprops::core::models::BomSpec;
use bomprops::core::services::{ImportError, LoadError, ValidationError, copy_properties};

use crate::common::{TestRepo, bom, props};

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_happy_path_imports_matching_keys() {
    let repo = TestRepo::new();
    repo.install_bom(
        "g:a:v",
        &[("junit.version", "5.10"), ("junit.group", "org"), ("mockito.version", "5.11")],
    );
    let boms = [bom("g:a:v", "lib", &["*.version"])];
    let mut project = BTreeMap::new();

    let report =
        copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap();

    assert_eq!(project, props(&[("lib.junit.version", "5.10"), ("lib.mockito.version", "5.11")]));
    assert_eq!(report.boms[0].count, 2);
}

#[test]
fn test_exclude_overrides_include() {
    let repo = TestRepo::new();
    repo.install_bom("g:a:v", &[("a", "1"), ("b-SNAPSHOT", "x"), ("c", "2")]);
    let boms = [bom("g:a:v", "p", &["*"]).with_excludes(["*-SNAPSHOT"])];
    let mut project = BTreeMap::new();

    copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap();

    assert_eq!(project, props(&[("p.a", "1"), ("p.c", "2")]));
}

#[test]
fn test_case_insensitive_include() {
    let repo = TestRepo::new();
    repo.install_bom("g:a:v", &[("foo.a", "1"), ("bar.a", "2")]);
    let boms = [bom("g:a:v", "x", &["FOO.*"]).with_case_sensitive(false)];
    let mut project = BTreeMap::new();

    copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap();

    assert_eq!(project, props(&[("x.foo.a", "1")]));
}

#[test]
fn test_case_sensitive_include_is_strict() {
    let repo = TestRepo::new();
    repo.install_bom("g:a:v", &[("foo.a", "1")]);
    let boms = [bom("g:a:v", "x", &["FOO.*"])];
    let mut project = BTreeMap::new();

    let report =
        copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap();

    assert!(project.is_empty());
    assert_eq!(report.boms[0].count, 0);
}

#[test]
fn test_case_mode_applies_to_excludes() {
    let repo = TestRepo::new();
    repo.install_bom("g:a:v", &[("Foo.version", "1"), ("bar.version", "2")]);
    let boms = [bom("g:a:v", "x", &["*"])
        .with_excludes(["foo.*"])
        .with_case_sensitive(false)];
    let mut project = BTreeMap::new();

    copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap();

    assert_eq!(project, props(&[("x.bar.version", "2")]));
}

#[test]
fn test_empty_boms_leave_project_unchanged() {
    let repo = TestRepo::new();
    let mut project = props(&[("existing", "value")]);

    let report =
        copy_properties(&repo.resolver(), &PomReader::new(), Some(&[]), &mut project).unwrap();

    assert!(report.is_empty());
    assert_eq!(project, props(&[("existing", "value")]));
}

#[test]
fn test_missing_prefix_fails_and_writes_nothing() {
    let repo = TestRepo::new();
    repo.install_bom("g:a:v", &[("a", "1")]);
    let boms = [BomSpec {
        prefix: None,
        ..bom("g:a:v", "unused", &["*"])
    }];
    let mut project = BTreeMap::new();

    let err =
        copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap_err();

    assert!(err.to_string().contains("prefix"));
    assert!(project.is_empty());
}

#[test]
fn test_later_bom_wins_on_collision() {
    let repo = TestRepo::new();
    repo.install_bom("g:b1:1", &[("x", "1")]);
    repo.install_bom("g:b2:1", &[("x", "2")]);
    let boms = [bom("g:b1:1", "p", &["*"]), bom("g:b2:1", "p", &["*"])];
    let mut project = HashMap::new();

    copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap();

    assert_eq!(project["p.x"], "2");
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_first_failure_stops_the_run() {
    let repo = TestRepo::new();
    repo.install_bom("g:good:1", &[("a", "1")]);
    repo.install_bom("g:good2:1", &[("b", "2")]);
    let boms = [
        bom("g:good:1", "p", &["*"]),
        bom("g:bad:1", "p", &["*"]),
        bom("g:good2:1", "p", &["*"]),
    ];
    let mut project = BTreeMap::new();

    let err =
        copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap_err();

    match &err {
        ImportError::Failed { bom, source } => {
            assert_eq!(bom, "g:bad:1");
            assert!(matches!(source, LoadError::Resolve(_)));
        },
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.source().is_some());
    assert_eq!(project, props(&[("p.a", "1")]));
}

#[test]
fn test_malformed_pom_fails_with_parse_cause() {
    let repo = TestRepo::new();
    repo.install_raw(&"g:broken:1".parse().unwrap(), "<project><properties>");
    let boms = [bom("g:broken:1", "p", &["*"])];
    let mut project = BTreeMap::new();

    let err =
        copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap_err();

    assert!(matches!(err, ImportError::Failed { source: LoadError::Parse { .. }, .. }));
    assert_eq!(err.to_string(), "Failed to process g:broken:1");
}

#[test]
fn test_validation_error_names_field_and_bom() {
    let repo = TestRepo::new();
    let boms = [BomSpec {
        version: Some("  ".to_string()),
        ..bom("g:a:v", "p", &["*"])
    }];
    let mut project = BTreeMap::new();

    let err =
        copy_properties(&repo.resolver(), &PomReader::new(), Some(&boms), &mut project).unwrap_err();

    match err {
        ImportError::Invalid(ValidationError::MissingField { field, bom }) => {
            assert_eq!(field, "version");
            assert!(bom.starts_with("g:a:"));
        },
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// REPOSITORY CHAIN
// =============================================================================

#[test]
fn test_boms_from_several_repositories() {
    let first = TestRepo::new();
    let second = TestRepo::new();
    first.install_bom("g:one:1", &[("a", "1")]);
    second.install_bom("g:two:1", &[("b", "2")]);
    let chain = RepositoryChain::from_roots([first.path(), second.path()]);
    let boms = [bom("g:one:1", "one", &["*"]), bom("g:two:1", "two", &["*"])];
    let mut project = BTreeMap::new();

    let report = copy_properties(&chain, &PomReader::new(), Some(&boms), &mut project).unwrap();

    assert_eq!(project, props(&[("one.a", "1"), ("two.b", "2")]));
    assert_eq!(report.total(), 2);
}
