use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("trdplink"))
}

fn write_signals(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("signals.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 5, "name": "Pressure", "datatype": "FLOAT32", "subsystemId": 2},
            {"id": 4, "name": "Door_Status", "datatype": "BOOLEAN", "subsystemId": 1}
        ]"#,
    )
    .expect("write signals.json");
    path
}

#[test]
fn help_covers_packet_subcommands() {
    cmd()
        .arg("packet")
        .arg("decode")
        .arg("--help")
        .assert()
        .success();
    cmd()
        .arg("packet")
        .arg("write")
        .arg("--help")
        .assert()
        .success();
    cmd()
        .arg("packet")
        .arg("batch")
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.bin");
    let output = temp.path().join("decoded.json");

    cmd()
        .arg("packet")
        .arg("decode")
        .arg(missing)
        .arg("-o")
        .arg(output)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn write_then_decode_round_trip() {
    let temp = TempDir::new().expect("tempdir");
    let signals = write_signals(&temp);
    let packet = temp.path().join("write.bin");

    cmd()
        .arg("packet")
        .arg("write")
        .arg("--signal-id")
        .arg("5")
        .arg("--datatype")
        .arg("float32")
        .arg("--value")
        .arg("23.5")
        .arg("-o")
        .arg(&packet)
        .assert()
        .success()
        .stderr(contains("OK:"));

    let bytes = std::fs::read(&packet).expect("read packet");
    assert_eq!(bytes.len(), 11);
    assert_eq!(bytes[0], 0x02);

    let assert = cmd()
        .arg("packet")
        .arg("decode")
        .arg(&packet)
        .arg("--signals")
        .arg(&signals)
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let decoded: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(decoded["Pressure"], Value::from(23.5));
}

#[test]
fn decode_without_signals_synthesizes_names() {
    let temp = TempDir::new().expect("tempdir");
    let packet = temp.path().join("write.bin");

    cmd()
        .arg("packet")
        .arg("write")
        .arg("--signal-id")
        .arg("99")
        .arg("--datatype")
        .arg("int32")
        .arg("--value")
        .arg("42")
        .arg("-o")
        .arg(&packet)
        .assert()
        .success();

    let assert = cmd()
        .arg("packet")
        .arg("decode")
        .arg(&packet)
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let decoded: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(decoded["Signal_99"], Value::from(42));
}

#[test]
fn batch_empty_is_header_only() {
    let temp = TempDir::new().expect("tempdir");
    let writes = temp.path().join("writes.json");
    let packet = temp.path().join("batch.bin");
    std::fs::write(&writes, "[]").expect("write writes.json");

    cmd()
        .arg("packet")
        .arg("batch")
        .arg(&writes)
        .arg("--subsystem")
        .arg("3")
        .arg("-o")
        .arg(&packet)
        .assert()
        .success();

    let bytes = std::fs::read(&packet).expect("read packet");
    assert_eq!(bytes, [0x03, 0x03, 0x00, 0x00]);
}

#[test]
fn batch_resolves_datatype_from_signals_file() {
    let temp = TempDir::new().expect("tempdir");
    let signals = write_signals(&temp);
    let writes = temp.path().join("writes.json");
    let packet = temp.path().join("batch.bin");
    std::fs::write(&writes, r#"[{"signalId": 4, "value": true}]"#).expect("write writes.json");

    cmd()
        .arg("packet")
        .arg("batch")
        .arg(&writes)
        .arg("--subsystem")
        .arg("1")
        .arg("--signals")
        .arg(&signals)
        .arg("-o")
        .arg(&packet)
        .assert()
        .success();

    // 4 (header) + 2 + 1 + 1 (boolean width from the signals file)
    let bytes = std::fs::read(&packet).expect("read packet");
    assert_eq!(bytes.len(), 8);
    assert_eq!(bytes[6], 0x04);
    assert_eq!(bytes[7], 1);
}

#[test]
fn decode_rejects_truncated_packet() {
    let temp = TempDir::new().expect("tempdir");
    let packet = temp.path().join("short.bin");
    std::fs::write(&packet, [0x01, 0x00]).expect("write packet");

    cmd()
        .arg("packet")
        .arg("decode")
        .arg(&packet)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("too short")));
}

#[test]
fn stdout_and_output_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let packet = temp.path().join("any.bin");
    let output = temp.path().join("decoded.json");

    cmd()
        .arg("packet")
        .arg("decode")
        .arg(packet)
        .arg("--stdout")
        .arg("-o")
        .arg(output)
        .assert()
        .failure()
        .stderr(contains("error"));
}

#[test]
fn unknown_datatype_is_rejected_by_clap() {
    cmd()
        .arg("packet")
        .arg("write")
        .arg("--signal-id")
        .arg("1")
        .arg("--datatype")
        .arg("int64")
        .arg("--value")
        .arg("1")
        .assert()
        .failure()
        .stderr(contains("unknown datatype"));
}
