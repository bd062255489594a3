use assert_fs::prelude::*;
use predicates::str::contains;

fn library() -> assert_fs::TempDir {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("Mauna Kea.txt")
        .write_str(
            "Mauna Kea is a dormant volcano.\n\
             == Geology ==\n\
             Basalt lava flows.\n\
             == References ==\n\
             Old books.",
        )
        .unwrap();
    dir.child("drafts/Draft.md").write_str("not indexed").unwrap();
    dir
}

#[test]
fn reads_an_article_from_a_library() {
    let dir = library();
    let output = assert_cmd::cargo::cargo_bin_cmd!("wikibot")
        .args(["--library", dir.path().to_str().unwrap()])
        .write_stdin("search mauna kea\nnext\n\nping\nq\nping\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    assert!(stdout.starts_with("Wikibot CLI mode - use 'q' to quit"));
    assert!(stdout.contains("0. Introduction\n1. Geology"));
    assert!(stdout.contains("Mauna Kea is a dormant volcano. (1/1)"));
    assert!(stdout.contains("Basalt lava flows. (1/1)"));
    assert!(!stdout.contains("Old books"));
    assert_eq!(stdout.matches("pong!").count(), 1);
}

#[test]
fn pattern_limits_what_is_indexed() {
    let dir = library();
    assert_cmd::cargo::cargo_bin_cmd!("wikibot")
        .args(["-l", dir.path().to_str().unwrap(), "--pattern", "*.md"])
        .write_stdin("search mauna kea\n")
        .assert()
        .success()
        .stdout(contains("Page does not exist! :-("));
}

#[test]
fn disabled_bot_stays_quiet() {
    let dir = library();
    assert_cmd::cargo::cargo_bin_cmd!("wikibot")
        .args(["--library", dir.path().to_str().unwrap()])
        .write_stdin("stop\nping\nwikibot enable\nping\n")
        .assert()
        .success()
        .stdout(contains("Wikibot disabled."))
        .stdout(contains("Wikibot now enabled"))
        .stdout(contains("pong!").count(1));
}

#[test]
fn bad_limits_are_rejected() {
    let dir = library();
    assert_cmd::cargo::cargo_bin_cmd!("wikibot")
        .args(["--library", dir.path().to_str().unwrap(), "--default-limit", "50"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("outside"));
}

#[test]
fn missing_library_is_an_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let missing = dir.child("nope");
    assert_cmd::cargo::cargo_bin_cmd!("wikibot")
        .args(["--library", missing.path().to_str().unwrap()])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("not accessible"));
}

#[test]
fn unknown_flags_are_usage_errors() {
    assert_cmd::cargo::cargo_bin_cmd!("wikibot")
        .arg("--chunk-size")
        .assert()
        .failure()
        .code(2);
}
