use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_hookdoc")))
}

const PHP_CLASS: &str = "<?php\n/**\n * Handles theme setup.\n *\n * @package Demo\n */\nclass Theme_Setup extends Base implements Hookable {\n\t/**\n\t * Register all hooks.\n\t *\n\t * @param string $context Where hooks run.\n\t * @see https://example.com/hooks\n\t */\n\tpublic function register_hooks( $context ) {\n\t\t/**\n\t\t * Filters the hook list.\n\t\t *\n\t\t * @param array $hooks Current hooks.\n\t\t */\n\t\t$hooks = apply_filters( 'theme_hooks', $hooks );\n\t}\n}\n";

const JS_FUNCTIONS: &str = "/**\n * Adds two numbers.\n *\n * @param {number} a First value.\n * @param {number} b Second value.\n * @returns {number} The sum.\n */\nconst add = (a, b) => {\n\treturn a + b;\n};\n";

// -- stdin mode --

#[test]
fn stdin_php_class_renders_hierarchy() {
    let assert = cmd()
        .args(["--dialect", "php"])
        .write_stdin(PHP_CLASS)
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("## Theme Setup\n"), "class heading: {output}");
    assert!(output.contains("Handles theme setup."));
    assert!(output.contains("- Extends: **Base**\n"));
    assert!(output.contains("- Implements: **Hookable**\n"));
    assert!(output.contains("\n## register_hooks\n"), "method at depth 2: {output}");
    assert!(output.contains("- `$context`: string — Where hooks run.\n"));
    assert!(output.contains("- [Reference](https://example.com/hooks)\n"));
    assert!(output.contains("\n#### Filters\n"));
    assert!(output.contains("\n##### theme_hooks\n"));
    assert!(output.contains("- `$hooks`: array — Current hooks.\n"));
}

#[test]
fn stdin_js_functions_render_inset() {
    let assert = cmd()
        .args(["--dialect", "js"])
        .write_stdin(JS_FUNCTIONS)
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("### add\n"), "free function at depth 3: {output}");
    assert!(output.contains("Adds two numbers."));
    assert!(output.contains("- `a`: number — First value.\n"));
    assert!(output.contains("- `b`: number — Second value.\n"));
    assert!(!output.contains("Filters"));
}

#[test]
fn stdin_markdown_demotes_headings() {
    let assert = cmd()
        .args(["--dialect", "markdown"])
        .write_stdin("# Title\n\n## Section\n\ntext\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "## Title\n\n### Section\n\ntext\n");
}

#[test]
fn stdin_markdown_without_headings_passes_through() {
    let assert = cmd()
        .args(["--dialect", "markdown"])
        .write_stdin("Just prose, nothing structural.\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "Just prose, nothing structural.\n");
}

#[test]
fn stdin_unknown_dialect_fails() {
    cmd()
        .args(["--dialect", "ruby"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dialect"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".php").unwrap();
    input.write_all(PHP_CLASS.as_bytes()).unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(input.path().to_str().unwrap())
        .assert()
        .success();

    let name = input.path().file_stem().unwrap().to_str().unwrap();
    let output = std::fs::read_to_string(dir.path().join(format!("{name}.mdx"))).unwrap();
    assert!(output.contains("## Theme Setup"));
    assert!(output.contains("##### theme_hooks"));
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg("whatever.php")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_walks_directories_and_skips_excluded() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    std::fs::write(src.path().join("math.js"), JS_FUNCTIONS).unwrap();
    std::fs::write(src.path().join("math.test.js"), JS_FUNCTIONS).unwrap();
    std::fs::create_dir(src.path().join("node_modules")).unwrap();
    std::fs::write(src.path().join("node_modules").join("dep.js"), JS_FUNCTIONS).unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(src.path().to_str().unwrap())
        .assert()
        .success();

    assert!(out.path().join("math.mdx").exists());
    assert!(!out.path().join("math.test.mdx").exists());
    assert!(!out.path().join("dep.mdx").exists());
}

#[test]
fn file_mode_skips_undocumented_files() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    std::fs::write(src.path().join("plain.js"), "const x = 1;\n").unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(src.path().to_str().unwrap())
        .assert()
        .success();

    assert!(!out.path().join("plain.mdx").exists());
}

#[test]
fn file_mode_copies_markdown_with_demoted_headings() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    std::fs::write(src.path().join("README.md"), "# Intro\n\nWelcome.\n").unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(src.path().to_str().unwrap())
        .assert()
        .success();

    let output = std::fs::read_to_string(out.path().join("README.mdx")).unwrap();
    assert_eq!(output, "## Intro\n\nWelcome.\n");
}

// -- member exclusion --

#[test]
fn excluded_member_is_never_rendered() {
    let input = "<?php\nclass A {\n\t/**\n\t * Wires everything together on load.\n\t *\n\t * @since 1.0.0\n\t */\n\tpublic function __construct() {\n\t}\n\n\t/**\n\t * Runs the loop once.\n\t *\n\t * @since 1.0.0\n\t */\n\tpublic function run() {\n\t}\n}\n";

    let assert = cmd()
        .args(["--dialect", "php"])
        .write_stdin(input)
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("## run\n"));
    assert!(!output.contains("__construct"));
}

#[test]
fn exclude_member_flag_extends_denylist() {
    let input = "<?php\nclass A {\n\t/**\n\t * Runs the loop once.\n\t */\n\tpublic function run() {\n\t}\n}\n";

    let assert = cmd()
        .args(["--dialect", "php", "--exclude-member", "run"])
        .write_stdin(input)
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!output.contains("## run"), "run should be excluded: {output}");
}
