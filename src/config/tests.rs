use std::io::Write;

use clap::Parser;

use super::*;
use crate::args::ClientArgs;

fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> Result<std::path::PathBuf, String> {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).map_err(|err| format!("create failed: {}", err))?;
    file.write_all(content.as_bytes())
        .map_err(|err| format!("write failed: {}", err))?;
    Ok(path)
}

fn parse_args(argv: &[&str]) -> Result<ClientArgs, String> {
    ClientArgs::try_parse_from(argv.iter().copied()).map_err(|err| err.to_string())
}

#[test]
fn loads_toml_config() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(
        &dir,
        "cassette.toml",
        "server_url = \"http://localhost:8080/api\"\nrequest_timeout_secs = 5\n",
    )?;
    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.server_url.as_deref() != Some("http://localhost:8080/api") {
        return Err(format!("Unexpected server_url: {:?}", config.server_url));
    }
    if config.request_timeout_secs != Some(5) {
        return Err(format!("Unexpected timeout: {:?}", config.request_timeout_secs));
    }
    Ok(())
}

#[test]
fn loads_json_config() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(
        &dir,
        "cassette.json",
        "{\"server_url\": \"http://localhost:9090\", \"consent_path\": \"/tmp/consent.json\"}",
    )?;
    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.server_url.as_deref() != Some("http://localhost:9090") {
        return Err(format!("Unexpected server_url: {:?}", config.server_url));
    }
    Ok(())
}

#[test]
fn rejects_unknown_extension() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(&dir, "cassette.yaml", "server_url: nope\n")?;
    if load_config_file(&path).is_ok() {
        return Err("Expected error for unsupported extension".to_owned());
    }
    Ok(())
}

#[test]
fn rejects_unknown_fields() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(&dir, "cassette.toml", "serverurl = \"typo\"\n")?;
    if load_config_file(&path).is_ok() {
        return Err("Expected error for unknown config field".to_owned());
    }
    Ok(())
}

#[test]
fn cli_flags_win_over_config() -> Result<(), String> {
    let config = ConfigFile {
        server_url: Some("http://from-config:8080".to_owned()),
        consent_path: None,
        request_timeout_secs: Some(5),
    };
    let args = parse_args(&["cassette", "--server", "http://from-cli:8080", "list"])?;
    let settings = Settings::resolve(&args, Some(&config)).map_err(|err| err.to_string())?;
    if settings.server_url != "http://from-cli:8080" {
        return Err(format!("Unexpected server_url: {}", settings.server_url));
    }
    if settings.timeout.as_secs() != 5 {
        return Err(format!("Unexpected timeout: {:?}", settings.timeout));
    }
    Ok(())
}

#[test]
fn missing_server_url_is_an_error() -> Result<(), String> {
    let args = parse_args(&["cassette", "list"])?;
    if Settings::resolve(&args, None).is_ok() {
        return Err("Expected error without a server URL".to_owned());
    }
    Ok(())
}

#[test]
fn zero_timeout_is_rejected() -> Result<(), String> {
    let args = parse_args(&[
        "cassette",
        "--server",
        "http://localhost:8080",
        "--timeout",
        "0",
        "list",
    ])?;
    if Settings::resolve(&args, None).is_ok() {
        return Err("Expected error for zero timeout".to_owned());
    }
    Ok(())
}
