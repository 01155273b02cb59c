use holdem_cli::run;
use std::fs;

fn run_sim(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["holdem", "sim"];
    argv.extend_from_slice(args);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn stacks(stdout: &str) -> Vec<u32> {
    stdout
        .lines()
        .filter(|l| l.starts_with("  Bot"))
        .filter_map(|l| l.rsplit('$').next())
        .map(|n| n.trim().parse().expect("stack"))
        .collect()
}

#[test]
fn sim_runs_n_hands_and_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands").join("sim.jsonl");
    let (code, stdout, _) = run_sim(&[
        "--hands",
        "5",
        "--seed",
        "1",
        "--output",
        path.to_string_lossy().as_ref(),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Simulated: 5 hands"));
    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        let v: serde_json::Value = serde_json::from_str(line).expect("valid json");
        assert!(v["hand_id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(v["seed"], 1);
        assert!(v["ts"].is_string());
    }
}

#[test]
fn chips_are_conserved_across_the_session() {
    let (code, stdout, _) = run_sim(&["--hands", "50", "--seed", "11"]);
    assert_eq!(code, 0);
    let s = stacks(&stdout);
    assert_eq!(s.len(), 6);
    assert_eq!(s.iter().sum::<u32>(), 6_000);
}

#[test]
fn same_seed_same_session() {
    let a = run_sim(&["--hands", "20", "--seed", "5", "--players", "4"]);
    let b = run_sim(&["--hands", "20", "--seed", "5", "--players", "4"]);
    assert_eq!(a.0, 0);
    assert_eq!(a.1, b.1);
    assert_eq!(stacks(&a.1).len(), 4);
}

#[test]
fn passive_table_plays_every_hand_to_showdown() {
    let (code, stdout, _) = run_sim(&["--hands", "3", "--seed", "2", "--ai", "passive"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ai=passive"));
    assert!(stdout.contains("Showdowns: 3"));
}

#[test]
fn zero_hands_is_rejected() {
    let (code, _, stderr) = run_sim(&["--hands", "0"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("hands must be >= 1"));
}

#[test]
fn table_size_is_bounded() {
    let (code, _, stderr) = run_sim(&["--hands", "1", "--players", "7"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Commands:"));
}
