/// End-to-end tests for the sbom-kit binary speaking JSON-RPC on stdio
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{json, Value};

fn parse_responses(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn run_session(lines: &[Value]) -> Vec<Value> {
    let input: String = lines.iter().map(|line| format!("{}\n", line)).collect();
    let output = cargo_bin_cmd!("sbom-kit")
        .env_remove("RUST_LOG")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    parse_responses(&output.stdout)
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: empty stdin ends the session cleanly
    #[test]
    fn test_exit_code_success_on_eof() {
        cargo_bin_cmd!("sbom-kit").write_stdin("").assert().code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("sbom-kit").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("sbom-kit")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("sbom-kit")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - explicit config path does not exist
    #[test]
    fn test_exit_code_application_error_missing_config() {
        cargo_bin_cmd!("sbom-kit")
            .args(["--config", "/nonexistent/sbom-kit.config.yml"])
            .write_stdin("")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to load config file"));
    }
}

mod protocol_tests {
    use super::*;

    #[test]
    fn test_health_and_tools_list() {
        let responses = run_session(&[
            json!({ "jsonrpc": "2.0", "id": 1, "method": "health" }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
        ]);

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["status"], "ok");

        let tools: Vec<&str> = responses[1]["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|tool| tool["name"].as_str().unwrap())
            .collect();
        assert_eq!(tools, vec!["sbom_create", "sbom_merge", "sbom_diff"]);
    }

    #[test]
    fn test_create_tool_call() {
        let responses = run_session(&[json!({
            "jsonrpc": "2.0",
            "id": "create-1",
            "method": "tools/call",
            "params": {
                "name": "sbom_create",
                "arguments": {
                    "deps": [{ "ecosystem": "cargo", "name": "serde", "version": "1.0.200" }],
                    "format": "cyclonedx"
                }
            }
        })]);

        let result = &responses[0]["result"];
        assert_eq!(responses[0]["id"], "create-1");
        assert_eq!(result["ok"], true);
        assert_eq!(result["meta"]["source"], "sbom-kit");
        assert_eq!(
            result["data"]["sbom"]["components"][0]["purl"],
            "pkg:cargo/serde@1.0.200"
        );
        let serial = result["data"]["sbom"]["serialNumber"].as_str().unwrap();
        assert!(serial.starts_with("urn:uuid:"));
    }

    #[test]
    fn test_merge_empty_input_returns_failure_envelope() {
        let responses = run_session(&[json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": { "name": "sbom_merge", "arguments": { "sboms": [], "format": "spdx" } }
        })]);

        let result = &responses[0]["result"];
        assert_eq!(result["ok"], false);
        assert_eq!(result["error"]["code"], "INVALID_INPUT");
        assert!(result.get("data").is_none());
    }

    #[test]
    fn test_protocol_errors() {
        let input = "not json\n\
                     {\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"resources/list\"}\n\
                     {\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/call\",\"params\":{\"name\":\"sbom_scan\",\"arguments\":{}}}\n";
        let output = cargo_bin_cmd!("sbom-kit")
            .write_stdin(input)
            .output()
            .unwrap();
        assert!(output.status.success());

        let responses = parse_responses(&output.stdout);
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[1]["error"]["code"], -32601);
        assert_eq!(responses[2]["error"]["code"], -32602);
    }

    #[test]
    fn test_notifications_get_no_response() {
        let responses = run_session(&[
            json!({ "jsonrpc": "2.0", "method": "health" }),
            json!({ "jsonrpc": "2.0", "id": 9, "method": "health" }),
        ]);

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 9);
    }

    #[test]
    fn test_null_id_gets_response() {
        let responses = run_session(&[json!({ "jsonrpc": "2.0", "id": null, "method": "health" })]);

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[0]["result"]["status"], "ok");
    }

    #[test]
    fn test_logs_stay_off_stdout() {
        let output = cargo_bin_cmd!("sbom-kit")
            .args(["--log-level", "debug"])
            .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"health\"}\n")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(parse_responses(&output.stdout).len(), 1);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("serving JSON-RPC on stdio"));
    }
}
