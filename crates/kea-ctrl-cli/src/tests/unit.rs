//! Unit tests driving `run_with_loader` end to end.

use std::fs;
use std::process::ExitCode;

use rstest::rstest;
use serde_json::{Value, json};
use tempfile::TempDir;

use super::{FakeAgent, config_for, run_cli};
use crate::cli::OutputFormat;
use crate::cli::ResolvedOutputFormat;

const UNREACHABLE: &str = "http://127.0.0.1:9/";

fn model_file(dir: &TempDir, model: &Value) -> String {
    let path = dir.path().join("model.json");
    fs::write(&path, model.to_string()).expect("write model file");
    path.display().to_string()
}

fn single_subnet_model() -> Value {
    json!({
        "interfaces": ["eth0"],
        "dhcp4": {
            "subnets": [{
                "id": 1,
                "subnet": "192.0.2.0/24",
                "pools": [{ "pool": "192.0.2.10-192.0.2.20" }]
            }]
        }
    })
}

#[rstest]
#[case::auto_terminal(OutputFormat::Auto, true, ResolvedOutputFormat::Human)]
#[case::auto_redirected(OutputFormat::Auto, false, ResolvedOutputFormat::Json)]
#[case::human(OutputFormat::Human, false, ResolvedOutputFormat::Human)]
#[case::json(OutputFormat::Json, true, ResolvedOutputFormat::Json)]
fn output_format_resolves_against_terminal(
    #[case] format: OutputFormat,
    #[case] terminal: bool,
    #[case] expected: ResolvedOutputFormat,
) {
    assert_eq!(format.resolve(terminal), expected);
}

#[test]
fn status_get_is_sent_to_the_named_service() {
    let agent = FakeAgent::spawn(r#"[{"result":0,"text":"running"}]"#).expect("agent starts");

    let output = run_cli(config_for(agent.url()), "--output json status-get dhcp4");

    assert_eq!(
        output.exit_code,
        ExitCode::SUCCESS,
        "stderr: {}",
        output.stderr
    );
    assert_eq!(
        agent.request(),
        Some(json!({ "command": "status-get", "service": ["dhcp4"] }))
    );
    let printed: Value = serde_json::from_str(&output.stdout).expect("stdout is JSON");
    assert_eq!(printed, json!([{ "result": 0, "text": "running" }]));
}

#[test]
fn human_output_prints_result_lines() {
    let agent = FakeAgent::spawn(r#"[{"result":0,"text":"running"}]"#).expect("agent starts");

    let output = run_cli(config_for(agent.url()), "--output human status-get dhcp4");

    assert_eq!(
        output.exit_code,
        ExitCode::SUCCESS,
        "stderr: {}",
        output.stderr
    );
    assert_eq!(output.stdout, "0: running\n");
}

#[test]
fn subnet_get_carries_the_identifier() {
    let agent = FakeAgent::spawn(r#"[{"result":0,"arguments":{"subnet6":[]}}]"#)
        .expect("agent starts");

    let output = run_cli(config_for(agent.url()), "subnet --family 6 get 7");

    assert_eq!(
        output.exit_code,
        ExitCode::SUCCESS,
        "stderr: {}",
        output.stderr
    );
    assert_eq!(
        agent.request(),
        Some(json!({ "command": "subnet6-get", "service": ["dhcp6"], "arguments": { "id": 7 } }))
    );
}

#[rstest]
#[case::v4("remote-server-get", "remote-server4-get", "dhcp4")]
#[case::v6("remote-server-get --family 6", "remote-server6-get", "dhcp6")]
fn remote_server_get_follows_the_family(
    #[case] command_line: &str,
    #[case] command: &str,
    #[case] service: &str,
) {
    let agent = FakeAgent::spawn(r#"[{"result":0,"arguments":{}}]"#).expect("agent starts");

    let output = run_cli(config_for(agent.url()), command_line);

    assert_eq!(
        output.exit_code,
        ExitCode::SUCCESS,
        "stderr: {}",
        output.stderr
    );
    assert_eq!(
        agent.request(),
        Some(json!({ "command": command, "service": [service] }))
    );
}

#[test]
fn remote_failure_is_reported_once_on_stderr() {
    let agent = FakeAgent::spawn(r#"[{"result":1,"text":"unable to forward command"}]"#)
        .expect("agent starts");

    let output = run_cli(config_for(agent.url()), "list-commands dhcp4");

    assert_eq!(output.exit_code, ExitCode::FAILURE);
    assert!(output.stdout.is_empty(), "stdout: {}", output.stdout);
    assert_eq!(
        output.stderr.matches("unable to forward command").count(),
        1
    );
}

#[test]
fn usage_errors_fail_without_contacting_the_agent() {
    let output = run_cli(config_for(UNREACHABLE), "subnet frobnicate");

    assert_eq!(output.exit_code, ExitCode::FAILURE);
    assert!(
        output.stderr.contains("frobnicate"),
        "stderr: {}",
        output.stderr
    );
}

#[test]
fn help_goes_to_stdout_and_succeeds() {
    let output = run_cli(config_for(UNREACHABLE), "--help");

    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    assert!(output.stdout.contains("Usage"), "stdout: {}", output.stdout);
    assert!(output.stderr.is_empty());
}

#[rstest]
#[case::hw_address("lease --family 6 get-by-hw-address 00:11:22:33:44:55", "DHCPv4")]
#[case::client_id("lease --family 6 get-by-client-id 01:02", "DHCPv4")]
#[case::duid("lease get-by-duid 00:01:02 1", "DHCPv6")]
fn family_specific_lease_lookups_reject_the_other_family(
    #[case] command: &str,
    #[case] family: &str,
) {
    let output = run_cli(config_for(UNREACHABLE), command);

    assert_eq!(output.exit_code, ExitCode::FAILURE);
    assert!(output.stderr.contains(family), "stderr: {}", output.stderr);
}

#[test]
fn invalid_endpoint_is_a_configuration_failure() {
    let output = run_cli(config_for("ftp://192.0.2.1/"), "status-get dhcp4");

    assert_eq!(output.exit_code, ExitCode::FAILURE);
    assert!(
        output.stderr.contains("invalid endpoint"),
        "stderr: {}",
        output.stderr
    );
}

#[test]
fn build_prints_the_document_without_contacting_the_agent() {
    let dir = TempDir::new().expect("temp dir");
    let path = model_file(&dir, &single_subnet_model());

    let output = run_cli(config_for(UNREACHABLE), &format!("build dhcp4 {path}"));

    assert_eq!(
        output.exit_code,
        ExitCode::SUCCESS,
        "stderr: {}",
        output.stderr
    );
    let document: Value = serde_json::from_str(&output.stdout).expect("stdout is JSON");
    assert_eq!(
        document.pointer("/subnet4/0/subnet"),
        Some(&json!("192.0.2.0/24"))
    );
    assert_eq!(
        document.pointer("/interfaces-config/interfaces"),
        Some(&json!(["eth0"]))
    );
}

#[test]
fn build_failure_names_the_missing_field() {
    let dir = TempDir::new().expect("temp dir");
    let path = model_file(&dir, &json!({ "dhcp4": { "subnets": [{ "id": 1 }] } }));

    let output = run_cli(config_for(UNREACHABLE), &format!("build dhcp4 {path}"));

    assert_eq!(output.exit_code, ExitCode::FAILURE);
    assert!(output.stdout.is_empty());
    assert!(
        output.stderr.contains("'subnet'"),
        "stderr: {}",
        output.stderr
    );
}

#[test]
fn apply_check_only_sends_the_wrapped_document_to_config_test() {
    let dir = TempDir::new().expect("temp dir");
    let path = model_file(&dir, &single_subnet_model());
    let agent = FakeAgent::spawn(r#"[{"result":0,"text":"Configuration seems sane."}]"#)
        .expect("agent starts");

    let output = run_cli(
        config_for(agent.url()),
        &format!("config apply dhcp4 {path} --check-only"),
    );

    assert_eq!(
        output.exit_code,
        ExitCode::SUCCESS,
        "stderr: {}",
        output.stderr
    );
    let request = agent.request().expect("agent received a request");
    assert_eq!(request.get("command"), Some(&json!("config-test")));
    assert_eq!(request.get("service"), Some(&json!(["dhcp4"])));
    assert_eq!(
        request.pointer("/arguments/Dhcp4/subnet4/0/id"),
        Some(&json!(1))
    );
}

#[test]
fn missing_input_file_is_reported() {
    let output = run_cli(
        config_for(UNREACHABLE),
        "config set dhcp4 /nonexistent/keactl-config.json",
    );

    assert_eq!(output.exit_code, ExitCode::FAILURE);
    assert!(
        output.stderr.contains("/nonexistent/keactl-config.json"),
        "stderr: {}",
        output.stderr
    );
}
