//! The driver's commands, written against generic input and output so they
//! can run on a terminal or in tests.

use crate::config::PlayConfig;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{
    actions, outcome, player, result, search, value, Action, Board, EngineError, Game, Outcome,
    Position,
};
use tracing::{debug, info, instrument, warn};

/// Reads a move typed by a person: a position number 1-9, a position label,
/// or `row,col`.
pub fn parse_move(input: &str) -> Option<Action> {
    Position::from_label_or_number(input)
        .map(Position::to_action)
        .or_else(|| input.parse::<Action>().ok())
}

/// Writes the numbered position legend.
pub fn write_legend<W: Write>(mut out: W) -> Result<()> {
    writeln!(out, "Positions:")?;
    for row in Position::ALL.chunks(3) {
        let numbers: Vec<String> = row.iter().map(|pos| pos.number().to_string()).collect();
        writeln!(out, "  {}", numbers.join("|"))?;
    }
    Ok(())
}

/// Writes each legal action of `board` with the minimax value of playing it.
pub fn write_values<W: Write>(board: &Board, mut out: W) -> Result<()> {
    for action in actions(board) {
        let next = result(board, action)?;
        let label = Position::from_action(action).map_or("?", |pos| pos.label());
        writeln!(out, "  {} {:<13} value {:+}", action, label, value(&next))?;
    }
    Ok(())
}

/// Human against the engine.
///
/// The human plays the mark in `config`; the engine plays the other. Bad
/// input is reported and the human is asked again.
#[instrument(skip(input, out), fields(human = %config.human()))]
pub fn play<R: BufRead, W: Write>(
    config: &PlayConfig,
    mut input: R,
    mut out: W,
) -> Result<Outcome> {
    let human = *config.human();
    let mut game = Game::new();
    info!("Starting game");

    if *config.show_legend() {
        write_legend(&mut out)?;
        writeln!(out)?;
    }

    while !game.is_over() {
        write!(out, "{}", game.board())?;

        if game.to_move() != human {
            let action = game.best_move().context("engine found no move")?;
            writeln!(out, "Engine plays {}", action)?;
            game.play(action)?;
            continue;
        }

        if *config.show_values() {
            write_values(game.board(), &mut out)?;
        }
        write!(out, "Your move ({}): ", human)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }

        let Some(action) = parse_move(line.trim()) else {
            writeln!(out, "Not a move: {:?}. Use 1-9, a label, or row,col.", line.trim())?;
            continue;
        };

        match game.play(action) {
            Ok(_) => debug!(%action, "Human move applied"),
            Err(err @ (EngineError::IllegalMove(_) | EngineError::InvalidAction { .. })) => {
                warn!(%err, "Human move rejected");
                writeln!(out, "{}", err)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let final_outcome = game.outcome();
    write!(out, "{}", game.board())?;
    writeln!(out, "{}", final_outcome)?;
    Ok(final_outcome)
}

/// Engine against itself, printing every board.
#[instrument(skip(out))]
pub fn selfplay<W: Write>(mut out: W) -> Result<Outcome> {
    let mut game = Game::new();
    while let Some(action) = game.best_move() {
        writeln!(out, "{} plays {}", game.to_move(), action)?;
        game.play(action)?;
        write!(out, "{}", game.board())?;
    }

    let final_outcome = game.outcome();
    writeln!(out, "{}", final_outcome)?;
    info!(outcome = %final_outcome, moves = game.history().len(), "Self-play finished");
    Ok(final_outcome)
}

/// Prints what the engine knows about a position.
#[instrument(skip(board, out))]
pub fn analyze<W: Write>(board: &Board, mut out: W) -> Result<()> {
    write!(out, "{}", board)?;
    let state = outcome(board);
    writeln!(out, "Outcome: {}", state)?;
    if state.is_over() {
        return Ok(());
    }

    writeln!(out, "To move: {}", player(board))?;
    write_values(board, &mut out)?;

    let report = search(board);
    if let Some(action) = report.action {
        writeln!(
            out,
            "Best move: {} (value {:+}, {} boards searched)",
            action, report.value, report.nodes
        )?;
    }
    Ok(())
}
