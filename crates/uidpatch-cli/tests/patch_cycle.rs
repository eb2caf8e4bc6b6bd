use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_uidpatch-cli"))
}

// opaque header with a decoy marker (no end marker after its varint),
// the real three-byte field, opaque tail
fn fixture_blob() -> Vec<u8> {
    vec![
        0xDE, 0xAD, 0x38, 0x01, 0x99, 0x00, 0x38, 0xE5, 0x8E, 0x26, 0x42, 0x51, 0x52,
    ]
}

fn write_fixture(dir: &Path) -> PathBuf {
    let p = dir.join("save.bytes");
    fs::write(&p, fixture_blob()).expect("write fixture");
    p
}

fn run_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn detect_reports_value_offset_and_length() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(dir.path());

    let err = run_ok(bin().args(["detect", "--in", input.to_str().unwrap()]));
    assert!(err.contains("value      = 624485"), "{err}");
    assert!(err.contains("offset     = 0x7"), "{err}");
    assert!(err.contains("length     = 3"), "{err}");
}

#[test]
fn set_replaces_only_the_field_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(dir.path());

    let err = run_ok(bin().args(["set", "--in", input.to_str().unwrap(), "--value", "5"]));
    assert!(err.contains("set ok:"), "{err}");

    let got = fs::read(dir.path().join("save_modified.bytes")).expect("read output");
    let expected = vec![
        0xDE, 0xAD, 0x38, 0x01, 0x99, 0x00, 0x38, 0x05, 0x42, 0x51, 0x52,
    ];
    assert_eq!(got, expected, "three field bytes collapse to one, rest unchanged");
}

#[test]
fn set_honors_an_explicit_output_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(dir.path());
    let out = dir.path().join("patched.bytes");

    run_ok(bin().args([
        "set",
        "--in",
        input.to_str().unwrap(),
        "--value",
        "624485",
        "--out",
        out.to_str().unwrap(),
    ]));

    // same value -> byte-identical output
    let got = fs::read(&out).expect("read output");
    assert_eq!(got, fixture_blob());
}

#[test]
fn set_can_grow_the_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("tiny.bytes");
    fs::write(&input, [0x38, 0x01, 0x42, 0x77]).expect("write fixture");

    run_ok(bin().args(["set", "--in", input.to_str().unwrap(), "--value", "624485"]));

    let got = fs::read(dir.path().join("tiny_modified.bytes")).expect("read output");
    assert_eq!(got, vec![0x38, 0xE5, 0x8E, 0x26, 0x42, 0x77]);
}

#[test]
fn clear_zeroes_the_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(dir.path());

    let err = run_ok(bin().args(["clear", "--in", input.to_str().unwrap()]));
    assert!(err.contains("clear ok:"), "{err}");
    assert!(err.contains("was=624485"), "{err}");

    let got = fs::read(dir.path().join("save_modified.bytes")).expect("read output");
    let expected = vec![
        0xDE, 0xAD, 0x38, 0x01, 0x99, 0x00, 0x38, 0x00, 0x42, 0x51, 0x52,
    ];
    assert_eq!(got, expected);
}

#[test]
fn negative_value_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(dir.path());

    let out = bin()
        .args(["set", "--in", input.to_str().unwrap(), "--value", "-1"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("invalid input"), "{err}");
    assert!(
        !dir.path().join("save_modified.bytes").exists(),
        "no output on failure"
    );
}

#[test]
fn blob_without_a_field_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("plain.bytes");
    fs::write(&input, [0x01, 0x38, 0x05, 0x43, 0x99]).expect("write fixture");

    let out = bin()
        .args(["detect", "--in", input.to_str().unwrap()])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("field not found"), "{err}");
}

#[test]
fn strict_filter_hides_short_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("tiny.bytes");
    fs::write(&input, [0x38, 0x01, 0x42, 0x77]).expect("write fixture");

    // default policy accepts the one-byte field
    let err = run_ok(bin().args(["detect", "--in", input.to_str().unwrap()]));
    assert!(err.contains("value      = 1"), "{err}");

    // strict policy rejects it
    let out = bin()
        .args(["detect", "--in", input.to_str().unwrap(), "--strict"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("field not found"), "{err}");
}

#[test]
fn inspect_shows_field_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(dir.path());

    let err = run_ok(bin().args(["inspect", "--in", input.to_str().unwrap()]));
    assert!(err.contains("field      = E5 8E 26"), "{err}");
    assert!(err.contains("content_id ="), "{err}");
}
