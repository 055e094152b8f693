use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

const VARIANT: &str = concat!(
    "               OpCapability Shader\n",
    "          %1 = OpExtInstImport \"GLSL.std.450\"\n",
    "               OpMemoryModel Logical GLSL450\n",
);

const UNIFORMS: &str = r#"{
    "resolution": {"binding": 1, "func": "glUniform2f", "args": ["256.0", "256.0"]},
    "injectionSwitch": {"binding": 0, "func": "glUniform1f", "args": ["0.0"]}
}"#;

fn write_inputs(dir: &Path, uniforms: &str) -> [std::path::PathBuf; 3] {
    let reference = dir.join("reference.asm");
    let variant = dir.join("variant.asm");
    let json = dir.join("uniforms.json");
    fs::write(&reference, "; reference only\n").unwrap();
    fs::write(&variant, VARIANT).unwrap();
    fs::write(&json, uniforms).unwrap();
    [reference, variant, json]
}

fn command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_graphicsfuzz-update"))
}

#[test]
fn prints_test_declaration() {
    let dir = tempfile::tempdir().unwrap();
    let [reference, variant, json] = write_inputs(dir.path(), UNIFORMS);

    command()
        .args([&reference, &variant, &json])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "void createHuguesProgs (SourceCollections& dst)\n",
        ))
        .stdout(predicate::str::contains(
            "\"          %1 = OpExtInstImport \\\"GLSL.std.450\\\"\\n\"\n",
        ))
        .stdout(predicate::str::contains("tcu::TestStatus runHugues (Context& context) {"))
        .stdout(predicate::str::contains("// injectionSwitch\nfloat u0 = 0.0f;"))
        .stdout(predicate::str::contains(
            "// resolution\ntcu::Vec2 u1 = tcu::Vec2(256.0f, 256.0f);",
        ))
        .stdout(predicate::str::contains("reference only").not());
}

#[test]
fn successful_run_keeps_stderr_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let [reference, variant, json] = write_inputs(dir.path(), UNIFORMS);

    command()
        .env_remove("RUST_LOG")
        .args([&reference, &variant, &json])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn custom_name_and_registration() {
    let dir = tempfile::tempdir().unwrap();
    let [reference, variant, json] = write_inputs(dir.path(), UNIFORMS);

    command()
        .args([&reference, &variant, &json])
        .args(["--name", "LoopBreak", "--registration"])
        .assert()
        .success()
        .stdout(predicate::str::contains("void createLoopBreakProgs (SourceCollections& dst)"))
        .stdout(predicate::str::contains(
            "addFunctionCaseWithPrograms(graphicsFuzzTests.get(), \"loop_break\", \"\", createLoopBreakProgs, runLoopBreak);",
        ));
}

#[test]
fn output_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let [reference, variant, json] = write_inputs(dir.path(), UNIFORMS);

    let first = command().args([&reference, &variant, &json]).output().unwrap();
    let second = command().args([&reference, &variant, &json]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_reference_fails() {
    let dir = tempfile::tempdir().unwrap();
    let [_, variant, json] = write_inputs(dir.path(), UNIFORMS);

    command()
        .arg(dir.path().join("absent.asm"))
        .args([&variant, &json])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("file does not exist"));
}

#[test]
fn unsupported_function_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let [reference, variant, json] = write_inputs(
        dir.path(),
        r#"{"u": {"binding": 0, "func": "glUniform3f", "args": ["1.0", "2.0", "3.0"]}}"#,
    );

    command()
        .args([&reference, &variant, &json])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("glUniform3f"));
}

#[test]
fn missing_binding_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let [reference, variant, json] = write_inputs(
        dir.path(),
        r#"{"u": {"binding": 3, "func": "glUniform1f", "args": ["1.0"]}}"#,
    );

    command()
        .args([&reference, &variant, &json])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("binding 0"));
}

#[test]
fn invalid_test_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    let [reference, variant, json] = write_inputs(dir.path(), UNIFORMS);

    command()
        .args([&reference, &variant, &json])
        .args(["--name", "not valid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid C++ identifier"));
}
