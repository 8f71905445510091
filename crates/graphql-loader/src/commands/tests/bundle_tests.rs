use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

const SCHEMA_JSON: &str = r#"{"__schema": {
    "queryType": {"name": "Query"},
    "types": [
        {"kind": "OBJECT", "name": "Query", "fields": [
            {"name": "me", "args": [], "type": {"kind": "OBJECT", "name": "User"}}
        ]},
        {"kind": "OBJECT", "name": "User", "fields": [
            {"name": "id", "args": [], "type": {"kind": "SCALAR", "name": "ID"}}
        ]}
    ]
}}"#;

async fn run_bundle(args: &[&str]) -> CommandResult {
    let mut cli = Cli::try_parse_from(
        ["graphql-loader", "bundle"].into_iter().chain(args.iter().copied()),
    ).unwrap();
    let command = cli.cmd.take().unwrap();
    command.run(cli).await
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

#[tokio::test]
async fn bundles_a_file_with_its_imports() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("fragments/user.graphql"), "fragment User on User { id }");
    let main_path = dir.path().join("me.graphql");
    write(&main_path, "#import \"./fragments/user.graphql\"\nquery Me { me { ...User } }");

    let result = run_bundle(&[main_path.to_str().unwrap()]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("query Me"));
    assert!(stdout.contains("fragment User on User"));
    assert!(!stdout.contains("#import"));
    assert!(result.stderr.is_none());
}

#[tokio::test]
async fn bundles_every_graphql_file_in_a_directory_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("b.gql"), "query B { b }");
    write(&dir.path().join("a.graphql"), "query A { a }");
    write(&dir.path().join("notes.txt"), "not graphql");

    let result = run_bundle(&[dir.path().to_str().unwrap()]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    let stdout = result.stdout.unwrap();
    let a_header = format!("# {}", dir.path().join("a.graphql").display());
    let b_header = format!("# {}", dir.path().join("b.gql").display());
    let a_idx = stdout.find(&a_header).unwrap();
    let b_idx = stdout.find(&b_header).unwrap();
    assert!(a_idx < b_idx);
    assert!(!stdout.contains("not graphql"));
}

#[tokio::test]
async fn document_output_is_json() {
    let dir = tempfile::tempdir().unwrap();
    let main_path = dir.path().join("q.graphql");
    write(&main_path, "query Q { a }");

    let result = run_bundle(&["--output", "document", main_path.to_str().unwrap()]).await;

    let json: serde_json::Value = serde_json::from_str(&result.stdout.unwrap()).unwrap();
    assert_eq!(json["kind"], "Document");
    assert_eq!(json["definitions"][0]["name"]["value"], "Q");
}

#[tokio::test]
async fn options_file_is_merged_with_flags() {
    let dir = tempfile::tempdir().unwrap();
    let options_path = dir.path().join("options.json");
    write(&options_path, r#"{"output": "document", "removeUnusedFragments": true}"#);
    let main_path = dir.path().join("q.graphql");
    write(&main_path, "query Q { a }\nfragment Unused on T { id }");

    let result = run_bundle(&[
        "--options",
        options_path.to_str().unwrap(),
        "--output",
        "string",
        main_path.to_str().unwrap(),
    ]).await;

    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("query Q"));
    assert!(!stdout.contains("Unused"));
}

#[tokio::test]
async fn validation_problems_are_reported_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("schema.json"), SCHEMA_JSON);
    let main_path = dir.path().join("queries/me.graphql");
    write(&main_path, "query Me { me { id email } }");

    let result = run_bundle(&[
        "--schema",
        "schema.json",
        "--validate",
        main_path.to_str().unwrap(),
    ]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert!(result.stdout.unwrap().contains("query Me"));
    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("Cannot query field \"email\" on type \"User\"."), "{stderr}");
}

#[tokio::test]
async fn emit_deps_lists_imports_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = dir.path().join("schema.json");
    write(&schema_path, SCHEMA_JSON);
    write(&dir.path().join("user.graphql"), "fragment User on User { id }");
    let main_path = dir.path().join("me.graphql");
    write(&main_path, "#import \"user.graphql\"\nquery Me { me { ...User } }");

    let result = run_bundle(&[
        "--schema",
        "schema.json",
        "--validate",
        "--emit-deps",
        main_path.to_str().unwrap(),
    ]).await;

    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("user.graphql"), "{stderr}");
    assert!(stderr.contains(&schema_path.display().to_string()), "{stderr}");
    assert!(stderr.contains("no validation errors"), "{stderr}");
}

#[tokio::test]
async fn validate_without_schema_fails() {
    let dir = tempfile::tempdir().unwrap();
    let main_path = dir.path().join("q.graphql");
    write(&main_path, "query Q { a }");

    let result = run_bundle(&["--validate", main_path.to_str().unwrap()]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stdout.is_none());
    assert!(result.stderr.unwrap().contains("requires a `schema`"));
}

#[tokio::test]
async fn missing_input_files_fail() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.graphql");

    let result = run_bundle(&[missing.to_str().unwrap()]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.unwrap().contains("Failed to read"));
}

#[test]
fn unknown_output_modes_are_rejected_by_the_parser() {
    assert!(Cli::try_parse_from(["graphql-loader", "bundle", "--output", "ast", "q.graphql"]).is_err());
}
