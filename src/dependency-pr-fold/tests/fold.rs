use std::path::PathBuf;

use dependency_pr_fold::{
    fold_pull_request_messages, load_messages, report_all, CreatePullRequest, DependencyFile,
    Message, ReportedDependency, ReportedRequirement,
};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_case(case: &str) -> (Vec<CreatePullRequest>, Vec<CreatePullRequest>) {
    let dir = fixtures_root().join(case);
    (
        load_messages(&dir.join("input.json")).unwrap(),
        load_messages(&dir.join("expected.json")).unwrap(),
    )
}

fn assert_folds_to_expected(case: &str) {
    let (input, expected) = load_case(case);
    let folded = fold_pull_request_messages(input);

    // compare as wire JSON so failures show the payload the API client would see
    let actual_json: Vec<_> = folded
        .iter()
        .map(|m| serde_json::to_value(m).unwrap())
        .collect();
    let expected_json: Vec<_> = expected
        .iter()
        .map(|m| serde_json::to_value(m).unwrap())
        .collect();
    assert_eq!(actual_json, expected_json);
}

#[test]
fn unrelated_prs_are_not_folded() {
    assert_folds_to_expected("unrelated");
}

#[test]
fn equivalent_prs_are_folded() {
    assert_folds_to_expected("equivalent");
}

#[test]
fn grouped_prs_fold_across_spellings_and_order() {
    assert_folds_to_expected("grouped");
}

#[test]
fn folding_fixtures_is_idempotent() {
    for case in ["unrelated", "equivalent", "grouped"] {
        let (input, _) = load_case(case);
        let once = fold_pull_request_messages(input);
        let twice = fold_pull_request_messages(once.clone());
        assert_eq!(once, twice, "fold of '{case}' is not idempotent");
    }
}

#[test]
fn folded_messages_report_sorted_dependencies() {
    let (input, _) = load_case("grouped");
    let folded = fold_pull_request_messages(input);

    assert_eq!(folded[0].message_type(), "create_pull_request");
    assert_eq!(folded[0].type_name(), "CreatePullRequest");
    assert_eq!(
        report_all(&folded).unwrap(),
        "CreatePullRequest\n\
         - Dependency.A/2.0.0\n\
         - Dependency.B/3.0.0\n\
         \n\
         CreatePullRequest\n\
         - Dependency.A/2.0.0\n\
         - Dependency.B/3.0.0"
    );
}

#[test]
fn group_shape_errors_surface_from_loading() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("input.json");
    let json = std::fs::read_to_string(fixtures_root().join("grouped/input.json"))
        .unwrap()
        .replacen(r#"{ "name": "nuget" }"#, r#"{ "other": "nuget" }"#, 1);
    std::fs::write(&path, json).unwrap();

    assert!(load_messages(&path).is_err());
}

#[test]
fn version_spelling_keeps_messages_apart() {
    let message = |version: &str, file: &str| CreatePullRequest {
        dependencies: vec![ReportedDependency {
            name: "Dependency.A".to_string(),
            version: version.to_string(),
            requirements: vec![ReportedRequirement {
                requirement: "1.0".to_string(),
                file: file.to_string(),
            }],
        }],
        updated_dependency_files: vec![DependencyFile {
            directory: "/".to_string(),
            name: "Directory.Packages.props".to_string(),
            content: "content".to_string(),
        }],
        base_commit_sha: "SHA".to_string(),
        commit_message: String::new(),
        pr_title: String::new(),
        pr_body: String::new(),
        dependency_group: None,
    };

    let folded = fold_pull_request_messages(vec![
        message("1.0", "/one.csproj"),
        message("1.0.0", "/two.csproj"),
    ]);

    assert_eq!(folded.len(), 2);
}
