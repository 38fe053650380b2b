//! End-to-end evolution scenarios.

use tagloom_core::{Alphabet, Program, Row, Symbol};
use tagloom_engine::Evolution;

fn row(text: &str) -> Row {
    Row::parse(text, &Alphabet::DEFAULT).unwrap()
}

fn fmt(r: &Row) -> String {
    r.format(&Alphabet::DEFAULT)
}

#[test]
fn five_betas_under_terminates_shrink_to_nothing() {
    let base = Row::repeat(Symbol::Beta, 5);
    let piece = Evolution::new(base, Program::from_ct(";;;").unwrap())
        .unwrap()
        .with_step_budget(250)
        .run();

    let rows: Vec<String> = piece.rows().iter().map(fmt).collect();
    assert_eq!(
        rows,
        vec![
            "ooooo", "ŦŦŦŦŦ", "+++++", "ŦŦŦŦ.", "++++ ", "ŦŦŦ. ", "+++  ", "ŦŦ.  ", "++   ",
            "Ŧ.   ", "+    ", ".    ", "     ",
        ]
    );

    // Each applied terminate removes exactly one live symbol, two rows at
    // a time, until nothing live remains.
    let live: Vec<usize> = piece.rows().iter().map(Row::live_count).collect();
    assert_eq!(live, vec![0, 5, 5, 4, 4, 3, 3, 2, 2, 1, 1, 0, 0]);
    assert!(piece.rows().last().unwrap().core().is_empty());
    assert_eq!(piece.width(), 5);
}

#[test]
fn evolution_is_deterministic() {
    let build = || {
        Evolution::new(
            row("++Ŧ++Ŧ++Ŧ"),
            Program::from_ct("010001;100;100100100;;;;").unwrap(),
        )
        .unwrap()
        .run()
    };
    assert_eq!(build(), build());
}

#[test]
fn budget_caps_a_program_that_never_settles() {
    // A lone grow instruction on a suitable base fires every step.
    let piece = Evolution::new(row("Ŧ"), Program::from_ct("0").unwrap())
        .unwrap()
        .run();
    assert_eq!(piece.len(), 3 + 2 * 250);
    assert_eq!(piece.width(), 251);
}

#[test]
fn mixed_program_keeps_the_pairing_invariant() {
    let piece = Evolution::new(row("+ŦŦŦ+"), Program::from_ct("00;1;").unwrap())
        .unwrap()
        .run();
    assert!(piece.len() >= 3);
    assert_eq!((piece.len() - 3) % 2, 0);
    assert_eq!(piece.rows()[0], Row::repeat(Symbol::Origin, 5));
}

#[test]
fn width_never_undershoots_any_row() {
    let piece = Evolution::new(row("+ŦŦ+ŦŦ+"), Program::from_ct("0;;").unwrap())
        .unwrap()
        .run();
    let max_len = piece.rows().iter().map(Row::len).max().unwrap();
    assert_eq!(piece.width(), max_len.max(7));
}
