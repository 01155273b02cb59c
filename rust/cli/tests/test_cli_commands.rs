use holdem_cli::run;

#[test]
fn help_goes_to_stdout() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["holdem", "--help"], &mut out, &mut err);
    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("Usage"));
    for cmd in ["play", "sim", "cfg"] {
        assert!(stdout.contains(cmd), "help should list {}", cmd);
    }
    assert!(err.is_empty());
}

#[test]
fn unknown_command_lists_commands() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["holdem", "replay"], &mut out, &mut err);
    assert_eq!(code, 2);
    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("Usage: holdem <command> [options]"));
    assert!(stderr.contains("  sim"));
    assert!(out.is_empty());
}

#[test]
fn cfg_prints_values_with_sources() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["holdem", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    let v: serde_json::Value = serde_json::from_slice(&out).expect("json");
    for key in [
        "starting_stack",
        "blind",
        "min_raise",
        "max_invalid_actions",
        "burn_cards",
        "seed",
    ] {
        assert!(v[key].get("value").is_some(), "{} has a value", key);
        assert!(v[key]["source"].is_string(), "{} has a source", key);
    }
}
