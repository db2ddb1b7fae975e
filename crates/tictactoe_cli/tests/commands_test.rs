//! Tests for the driver commands.

use std::io::Cursor;
use tictactoe_cli::{analyze, parse_move, play, selfplay, PlayConfig};
use tictactoe_engine::{Action, Board, Outcome, Player};

fn run_play(config: &PlayConfig, input: &str) -> (anyhow::Result<Outcome>, String) {
    let mut out = Vec::new();
    let result = play(config, Cursor::new(input.to_string()), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_move_accepts_all_forms() {
    assert_eq!(parse_move("5"), Some(Action::new(1, 1)));
    assert_eq!(parse_move("top right"), Some(Action::new(0, 2)));
    assert_eq!(parse_move("2,0"), Some(Action::new(2, 0)));
    assert_eq!(parse_move("nowhere"), None);
}

#[test]
fn test_engine_beats_careless_human() {
    // The human tries cells 1, 2, 3, ... in order.
    let config = PlayConfig::default().with_show_legend(false);
    let (result, output) = run_play(&config, "nope\n5,5\n1\n2\n3\n4\n5\n6\n7\n8\n9\n");

    assert_eq!(result.unwrap(), Outcome::Winner(Player::O));
    assert!(output.contains("Not a move: \"nope\""));
    assert!(output.contains("outside the 3x3 grid"));
    assert!(output.contains("Illegal move: cell (0, 2) is already occupied"));
    assert!(output.contains("Engine plays (1, 1)"));
    assert!(output.ends_with("Player O wins\n"));
}

#[test]
fn test_engine_moves_first_when_human_is_o() {
    let config = PlayConfig::default().with_human(Player::O);
    let (result, output) = run_play(&config, "");

    assert!(output.starts_with("Positions:"));
    assert!(output.contains("Engine plays (0, 0)"));
    assert!(result.is_err(), "closed input should end the game early");
}

#[test]
fn test_show_values_lists_moves() {
    let config = PlayConfig::default()
        .with_show_legend(false)
        .with_show_values(true);
    let (_, output) = run_play(&config, "");
    assert!(output.contains("(0, 0) Top-left"));
    assert!(output.contains("value +0"));
}

#[test]
fn test_selfplay_draws() {
    let mut out = Vec::new();
    let outcome = selfplay(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(outcome, Outcome::Draw);
    assert!(output.starts_with("X plays (0, 0)"));
    assert!(output.ends_with("Draw\n"));
}

#[test]
fn test_analyze_finds_winning_move() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let mut out = Vec::new();
    analyze(&board, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Outcome: In progress"));
    assert!(output.contains("To move: X"));
    assert!(output.contains("Best move: (0, 2) (value +1"));
}

#[test]
fn test_analyze_terminal_board() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    let mut out = Vec::new();
    analyze(&board, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Outcome: Player X wins"));
    assert!(!output.contains("Best move"));
}
