use predicates::prelude::*;
use pushkit_json::{decode, JsonValue, ReadingOptions};
use std::error::Error;
use std::fs;
use tempfile::TempDir;

fn pushkit() -> Result<assert_cmd::Command, Box<dyn Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("pushkit")?;
    cmd.env_remove("PUSHKIT_LOG");
    Ok(cmd)
}

fn stdout_json(output: &[u8]) -> Result<JsonValue, Box<dyn Error>> {
    let text = String::from_utf8(output.to_vec())?;
    Ok(decode(text.trim_end(), ReadingOptions::default())?)
}

#[test]
fn register_prints_canonical_payload() -> Result<(), Box<dyn Error>> {
    pushkit()?
        .args([
            "register",
            "--alias",
            "bob",
            "--tag",
            "vip",
            "--quiet-start",
            "22:00",
            "--quiet-end",
            "08:00",
            "--badge",
            "3",
        ])
        .assert()
        .success()
        .stdout(
            "{\"alias\":\"bob\",\"tag\":\"vip\",\"quiettime\":{\"start\":\"22:00\",\"end\":\"08:00\"},\"badge\":3}\n",
        );
    Ok(())
}

#[test]
fn register_with_no_fields_prints_empty_object() -> Result<(), Box<dyn Error>> {
    pushkit()?.arg("register").assert().success().stdout("{}\n");
    Ok(())
}

#[test]
fn register_multiple_tags_sorted_pretty() -> Result<(), Box<dyn Error>> {
    let output = pushkit()?
        .args(["register", "--tag", "b", "--tag", "a", "--tz", "UTC", "--pretty", "--sorted"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output)?;
    assert_eq!(text, "{\n  \"tags\": [\n    \"b\",\n    \"a\"\n  ],\n  \"tz\": \"UTC\"\n}\n");
    Ok(())
}

#[test]
fn register_quiet_time_needs_both_ends() -> Result<(), Box<dyn Error>> {
    pushkit()?
        .args(["register", "--quiet-start", "22:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--quiet-end"));
    Ok(())
}

#[test]
fn register_reads_time_zone_from_config() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("pushkit.toml");
    fs::write(
        &config_path,
        "[registration]\ntime_zone = \"Europe/Berlin\"\n",
    )?;

    let output = pushkit()?
        .args(["register", "--badge", "1", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value = stdout_json(&output)?;
    assert_eq!(value.get("tz").and_then(JsonValue::as_str), Some("Europe/Berlin"));
    assert_eq!(value.get("badge").and_then(JsonValue::as_i64), Some(1));
    Ok(())
}

#[test]
fn push_writes_request_body() -> Result<(), Box<dyn Error>> {
    pushkit()?
        .args([
            "push",
            "--alert",
            "Hello",
            "--tag",
            "vip",
            "--url",
            "https://push.example/api/push/",
        ])
        .assert()
        .success()
        .stdout("{\"tag\":\"vip\",\"alert\":\"Hello\"}\n");
    Ok(())
}

#[test]
fn push_broadcast_uses_config_url() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("pushkit.toml");
    fs::write(&config_path, "[push]\nurl = \"https://push.example/api/push/\"\n")?;

    pushkit()?
        .args(["push", "--alert", "All", "--broadcast", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout("{\"audience\":\"all\",\"alert\":\"All\"}\n");
    Ok(())
}

#[test]
fn push_requires_endpoint_and_single_audience() -> Result<(), Box<dyn Error>> {
    pushkit()?
        .args(["push", "--alert", "x", "--tag", "t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no push endpoint"));

    pushkit()?
        .args(["push", "--alert", "x", "--tag", "t", "--alias", "a", "--url", "u"])
        .assert()
        .failure();

    pushkit()?
        .args(["push", "--alert", "x", "--url", "u"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn decode_reformats_file() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let input = dir.path().join("in.json");
    fs::write(&input, "{ \"b\": [1, 2.5], \"a\": null }")?;

    pushkit()?
        .arg("decode")
        .arg(&input)
        .assert()
        .success()
        .stdout("{\"b\":[1,2.5],\"a\":null}\n");

    pushkit()?
        .arg("decode")
        .arg(&input)
        .arg("--sorted")
        .assert()
        .success()
        .stdout("{\"a\":null,\"b\":[1,2.5]}\n");
    Ok(())
}

#[test]
fn decode_reads_stdin() -> Result<(), Box<dyn Error>> {
    pushkit()?
        .args(["decode", "-"])
        .write_stdin("[\"x\", {\"y\": true}]")
        .assert()
        .success()
        .stdout("[\"x\",{\"y\":true}]\n");
    Ok(())
}

#[test]
fn decode_rejects_malformed_and_scalar_documents() -> Result<(), Box<dyn Error>> {
    pushkit()?
        .arg("decode")
        .write_stdin("{\"a\": }")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());

    pushkit()?
        .arg("decode")
        .write_stdin("\"bare\"")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NotACollection"));
    Ok(())
}

#[test]
fn no_flags_override_config_output() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("pushkit.toml");
    fs::write(&config_path, "[output]\npretty = true\nsorted_keys = true\n")?;

    pushkit()?
        .args(["decode", "-", "--config"])
        .arg(&config_path)
        .write_stdin("{\"b\":1,\"a\":2}")
        .assert()
        .success()
        .stdout("{\n  \"a\": 2,\n  \"b\": 1\n}\n");

    pushkit()?
        .args(["decode", "-", "--no-pretty", "--no-sorted", "--config"])
        .arg(&config_path)
        .write_stdin("{\"b\":1,\"a\":2}")
        .assert()
        .success()
        .stdout("{\"b\":1,\"a\":2}\n");
    Ok(())
}

#[test]
fn decode_rejects_documents_nested_too_deep() -> Result<(), Box<dyn Error>> {
    let levels = pushkit_json::MAX_DEPTH + 1;
    pushkit()?
        .arg("decode")
        .write_stdin(format!("{}{}", "[".repeat(levels), "]".repeat(levels)))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("DepthLimitExceeded"));
    Ok(())
}
