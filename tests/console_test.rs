//! Tests for the line-oriented console front end.

use std::io::Cursor;
use strictly_rematch::console::{self, OutputFormat};
use strictly_rematch::{SessionController, Snapshot, Symbol};

fn run_script(script: &str, format: OutputFormat) -> (SessionController, String) {
    let mut session = SessionController::default();
    let mut output = Vec::new();
    console::run(&mut session, Cursor::new(script), &mut output, format).expect("console run");
    (session, String::from_utf8(output).expect("utf8 output"))
}

#[test]
fn test_script_to_win() {
    let script = "rename x Ada\ns 0 0\ns 1 0\ns 0 1\ns 1 1\ns 0 2\n";
    let (session, output) = run_script(script, OutputFormat::Text);

    assert_eq!(session.log().len(), 5);
    assert!(output.contains("Game Over! Ada won!"));
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let script = "s 1 1\ns 1 1\nselect 9 9\nfly\ns 0 0\n";
    let (session, output) = run_script(script, OutputFormat::Text);

    assert!(output.contains("error: Square Center (1, 1) is already occupied"));
    assert!(output.contains("error: (9, 9) is not on the board"));
    assert!(output.contains("error: Unknown command: fly"));
    assert_eq!(session.log().len(), 2);
}

#[test]
fn test_quit_stops_reading() {
    let (session, _) = run_script("s 0 0\nquit\ns 1 1\n", OutputFormat::Text);
    assert_eq!(session.log().len(), 1);
}

#[test]
fn test_log_command_lists_newest_first() {
    let (_, output) = run_script("s 0 0\ns 2 2\nlog\n", OutputFormat::Text);
    let log_start = output.find("Player 2 (O) selected").expect("O entry");
    let x_entry = output.rfind("Player 1 (X) selected").expect("X entry");
    assert!(log_start < x_entry);
}

#[test]
fn test_json_lines() {
    let (_, output) = run_script("s 1 1\nrematch\n", OutputFormat::Json);
    let snapshots: Vec<Snapshot> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("snapshot json"))
        .collect();

    // Initial state, after the move, after the rematch.
    assert_eq!(snapshots.len(), 3);
    assert_eq!(*snapshots[1].active_player(), Symbol::O);
    assert!(snapshots[2].turns().is_empty());
}
