use assert_cmd::Command;
use predicates::prelude::*;

fn scopehold() -> Command {
    Command::cargo_bin("scopehold").expect("binary builds")
}

#[test]
fn help_lists_every_operation() {
    scopehold()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("add")
                .and(predicate::str::contains("showall"))
                .and(predicate::str::contains("print"))
                .and(predicate::str::contains("count"))
                .and(predicate::str::contains("remove"))
                .and(predicate::str::contains("removedomain")),
        );
}

#[test]
fn missing_arguments_are_usage_errors() {
    scopehold().assert().code(2);
    scopehold().arg("acme").assert().code(2);
}

#[test]
fn removedomain_requires_a_domain_argument() {
    scopehold()
        .args(["acme", "removedomain"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--domain"));
}

#[test]
fn removedomain_rejects_a_blank_domain() {
    scopehold()
        .args(["acme", "removedomain", "-d", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("domain must not be empty"));
}

#[test]
fn add_with_missing_file_fails_with_the_file_exit_code() {
    scopehold()
        .args(["acme", "add", "definitely/not/here.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
#[ignore = "requires a local Redis on localhost:6379"]
fn full_project_lifecycle_against_local_redis() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wordlist = dir.path().join("targets.txt");
    std::fs::write(&wordlist, "a.example.com\nb.example.com\na.example.com\n").expect("wordlist");

    let project = format!("scopehold-cli-test-{}", std::process::id());

    // Leftovers from an earlier aborted run must not skew the counts.
    scopehold().arg(&project).arg("remove").assert().success();

    scopehold()
        .arg(&project)
        .arg("add")
        .arg(&wordlist)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 out of 3 domains were duplicates (33.33%).",
        ));

    scopehold()
        .arg(&project)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "There are 2 domains in the project '{project}'."
        )));

    scopehold()
        .arg(&project)
        .arg("showall")
        .assert()
        .success()
        .stdout(predicate::str::diff("a.example.com\nb.example.com\n"));

    scopehold()
        .arg(&project)
        .args(["print", "-d", "a.example"])
        .assert()
        .success()
        .stdout(predicate::str::diff("a.example.com\n"));

    scopehold()
        .arg(&project)
        .args(["print", "-d", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching domain found for 'zzz'."));

    scopehold()
        .arg(&project)
        .args(["removedomain", "-d", "a.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Domain 'a.example.com' removed successfully from project '{project}'."
        )));

    scopehold()
        .arg(&project)
        .arg("remove")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Project '{project}' deleted successfully."
        )));

    scopehold()
        .arg(&project)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Error: Project '{project}' does not exist."
        )));
}
