//! Integration tests for `.div-guard.toml` handling.

mod common;

use common::{TestFixture, balanced_post, post_with_box};
use predicates::prelude::*;

#[test]
fn local_config_changes_scan_directory() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[scan]
dir = "articles"
"#,
    );
    fixture.create_file("articles/a.html", &balanced_post());

    div_guard!()
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating 1 documents in 'articles'"));
}

#[test]
fn cli_directory_overrides_config() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[scan]
dir = "articles"
"#,
    );
    fixture.create_post("a.html", &balanced_post());

    div_guard!()
        .current_dir(fixture.path())
        .arg("blog")
        .assert()
        .success()
        .stdout(predicate::str::contains("in 'blog'"));
}

#[test]
fn config_thresholds_apply() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r"
[boxes]
warn_after = 10
unclosed_after = 20
",
    );
    fixture.create_post("a.html", &post_with_box("callout", 15));

    div_guard!()
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("took 15 lines to close"));
}

#[test]
fn config_exclude_patterns_apply() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[scan]
exclude = ["**/index.html"]
"#,
    );
    fixture.create_post("index.html", "<div>\n");
    fixture.create_post("post.html", &balanced_post());

    div_guard!()
        .current_dir(fixture.path())
        .assert()
        .success();
}

#[test]
fn no_config_flag_ignores_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[scan]
dir = "articles"
"#,
    );
    fixture.create_post("a.html", &balanced_post());

    div_guard!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("in 'blog'"));
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "ci/div-guard.toml",
        r#"
[scan]
extension = "htm"
"#,
    );
    fixture.create_post("a.htm", &balanced_post());

    div_guard!()
        .current_dir(fixture.path())
        .args(["--config", "ci/div-guard.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating 1 documents"));
}

#[test]
fn missing_explicit_config_is_config_error() {
    let fixture = TestFixture::new();

    div_guard!()
        .current_dir(fixture.path())
        .args(["--config", "missing.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn invalid_toml_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan\ndir = ");
    fixture.create_post("a.html", &balanced_post());

    div_guard!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn unknown_config_key_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[scan]
directory = "blog"
"#,
    );

    div_guard!()
        .current_dir(fixture.path())
        .assert()
        .code(2);
}

#[test]
fn invalid_exclude_pattern_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[scan]
exclude = ["[oops"]
"#,
    );

    div_guard!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid glob pattern"));
}

#[test]
fn cli_threshold_can_repair_config_thresholds() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r"
[boxes]
warn_after = 250
",
    );
    fixture.create_post("a.html", &post_with_box("callout", 300));

    div_guard!()
        .current_dir(fixture.path())
        .args(["--unclosed-after", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("took 300 lines to close"));

    div_guard!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "boxes.warn_after (250) must be less than boxes.unclosed_after (200)",
        ));
}
