//! Listing of available operations

mod common;

use common::TestEnv;

#[test]
fn no_arguments_lists_operations_and_succeeds() {
    let env = TestEnv::new();
    let result = env.run(&[]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.exit_code, 0);
    insta::assert_snapshot!("operations", result.stdout.trim_end());
}

#[test]
fn list_flag_wins_over_operations() {
    let env = TestEnv::new();
    let result = env.run(&["--list", "deploy"]);

    assert!(result.success);
    assert!(result.stdout.starts_with("Available operations:"));
    assert!(env.project_entries().is_empty());
}

#[test]
fn listing_ignores_broken_config() {
    let env = TestEnv::new().with_project_config("this is = = not toml");
    let result = env.run(&[]);

    assert!(result.success, "listing must not load config: {}", result.stderr);
    assert!(result.stdout.contains("deploy"));
}
