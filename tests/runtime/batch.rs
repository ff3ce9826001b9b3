//! Batch translation of move lists.

use std::io::Cursor;

use spokenmove_runtime::{BatchReport, Session, run_batch};

const GAME: &str = "\
e4
e5
night to f3
knight to c6

bishop to b5
a6
bishop takes c6
d takes c6
castle kingside
";

fn run(input: &str) -> (BatchReport, String, String) {
    let mut session = Session::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let report = run_batch(&mut session, Cursor::new(input), &mut out, &mut err).unwrap();
    (
        report,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn translates_a_game() {
    let (report, out, err) = run(GAME);
    assert!(report.is_success());
    assert_eq!(report.translated, 9);
    assert_eq!(out, "e4\ne5\nNf3\nNc6\nBb5\na6\nBxc6\ndxc6\nO-O\n");
    assert!(err.is_empty());
}

#[test]
fn failures_carry_line_numbers_and_do_not_stop() {
    let (report, out, err) = run("e4\nknight to\n\ncastle sideways\nwhite resigns\n");
    assert_eq!(
        report,
        BatchReport {
            translated: 2,
            failed: 2,
        }
    );
    assert!(!report.is_success());
    assert_eq!(out, "e4\n0-1\n");

    let lines: Vec<&str> = err.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("line 2: "));
    assert!(lines[1].starts_with("line 4: "));
}

#[test]
fn empty_input() {
    let (report, out, err) = run("\n  \n");
    assert_eq!(report, BatchReport::default());
    assert!(report.is_success());
    assert!(out.is_empty() && err.is_empty());
}

#[test]
fn batch_fills_session_history() {
    let mut session = Session::new();
    let mut sink = Vec::new();
    let mut errors = Vec::new();
    run_batch(&mut session, Cursor::new(GAME), &mut sink, &mut errors).unwrap();
    assert_eq!(session.history().len(), 9);
    assert_eq!(session.history()[8].notation, "O-O");
}
