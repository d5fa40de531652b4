//! Golden snapshot tests for generated module sources.

use assert_cmd::Command;
use cify_mosc::transcode::unescape_literal;
use insta::assert_snapshot;
use similar_asserts::assert_eq;
use std::fs;
use tempfile::TempDir;

const CORE_MODULE: &str = r#"class Bool {}
class String is Sequence {
  toString { "\"" + this + "\"" }
  escape(s) { s.replace("\\", "\\\\") }
}
"#;

#[test]
fn golden_core_module_is_stable() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("msc_core.msc"), CORE_MODULE).expect("write input");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cify-mosc"));
    cmd.current_dir(dir.path()).args(["core.msc.inc", "msc_core.msc"]);
    cmd.assert().success();

    let generated = fs::read_to_string(dir.path().join("core.msc.inc")).expect("read output");
    assert_snapshot!(generated, @r#"
    // Generated automatically from msc_core.msc. Do not edit.
    static const char* coreModuleSource =
    "class Bool {}\n"
    "class String is Sequence {\n"
    "  toString { \"\\\"\" + this + \"\\\"\" }\n"
    "  escape(s) { s.replace(\"\\\\\", \"\\\\\\\\\") }\n"
    "}\n";
    "#);
}

#[test]
fn generated_literal_decodes_to_source() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("msc_core.msc"), CORE_MODULE).expect("write input");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cify-mosc"));
    cmd.current_dir(dir.path()).args(["core.msc.inc", "msc_core.msc"]);
    cmd.assert().success();

    let generated = fs::read_to_string(dir.path().join("core.msc.inc")).expect("read output");
    assert_eq!(unescape_literal(literal_body(&generated)), CORE_MODULE);
}

#[test]
fn empty_module_still_declares_constant() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("opt_empty.msc"), "").expect("write input");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cify-mosc"));
    cmd.current_dir(dir.path()).args(["empty.msc.inc", "opt_empty.msc"]);
    cmd.assert().success();

    let generated = fs::read_to_string(dir.path().join("empty.msc.inc")).expect("read output");
    assert_eq!(
        generated,
        "// Generated automatically from opt_empty.msc. Do not edit.\n\
         static const char* emptyModuleSource =\n\
         \"\";\n"
    );
}

#[test]
fn missing_final_newline_keeps_literal_terminated() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("tail.msc"), "a\r\nend").expect("write input");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cify-mosc"));
    cmd.current_dir(dir.path()).args(["tail.msc.inc", "tail.msc"]);
    cmd.assert().success();

    let generated = fs::read_to_string(dir.path().join("tail.msc.inc")).expect("read output");
    assert!(generated.ends_with("\"a\\n\"\n\"end\";\n"));
    assert_eq!(unescape_literal(literal_body(&generated)), "a\nend");
}

#[test]
fn trigraph_sequences_never_reach_the_fragment() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("opt_trigraph.msc"), "??/x\nwhat???=\n").expect("write input");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cify-mosc"));
    cmd.current_dir(dir.path()).args(["trigraph.msc.inc", "opt_trigraph.msc"]);
    cmd.assert().success();

    let generated = fs::read_to_string(dir.path().join("trigraph.msc.inc")).expect("read output");
    assert_snapshot!(generated, @r#"
    // Generated automatically from opt_trigraph.msc. Do not edit.
    static const char* trigraphModuleSource =
    "?\?/x\n"
    "what?\?\?=\n";
    "#);
    assert!(!generated.contains("??"));
    assert_eq!(unescape_literal(literal_body(&generated)), "??/x\nwhat???=\n");
}

/// Everything between the declaration line and the terminating semicolon.
fn literal_body(generated: &str) -> &str {
    let start = generated.find(" =\n").expect("declaration line") + 3;
    let end = generated.rfind(";\n").expect("terminator");
    &generated[start..end]
}
