#![cfg(feature = "std")]

//! Text renderer: both boards side by side plus names, tallies and the end
//! of match message. Reads the game, never changes it.

use std::fmt::Write;
use std::io::BufRead;

use crate::{board::Board, game::Game, player::StrategyAdapter, tile::Tile};

const GAP: &str = "   vs   ";

/// Glyph for a single tile: ship pieces, `X` for hits, `o` for misses.
pub fn tile_glyph(tile: &Tile) -> char {
    if tile.is_hit() {
        'X'
    } else if tile.is_miss() {
        'o'
    } else {
        tile.ship_piece().map_or('.', |p| p.glyph())
    }
}

/// Lines of one board including a column header.
fn board_lines(board: &Board) -> Vec<String> {
    let mut lines = Vec::with_capacity(board.height() + 1);
    let mut header = String::from("    ");
    for x in 0..board.width() {
        let _ = write!(header, "{} ", x % 10);
    }
    lines.push(header);
    for (y, row) in board.rows().enumerate() {
        let mut line = format!("{:>3} ", y);
        for tile in row {
            line.push(tile_glyph(tile));
            line.push(' ');
        }
        lines.push(line);
    }
    lines
}

/// Render a full frame.
pub fn render_frame(game: &Game, players: &[StrategyAdapter; 2]) -> String {
    let left = board_lines(game.board(0));
    let right = board_lines(game.board(1));
    let titles = [0usize, 1].map(|i| {
        format!("{} board (wins: {})", players[i].name(), players[i].wins())
    });
    // wide enough for the left board and its title
    let column = left
        .iter()
        .chain(core::iter::once(&titles[0]))
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<column$}{}{}", titles[0], GAP, titles[1]);
    for (l, r) in left.iter().zip(right.iter()) {
        let _ = writeln!(out, "{:<column$}{}{}", l, " ".repeat(GAP.len()), r);
    }
    out.push('\n');
    if game.is_over() {
        let _ = writeln!(out, "{}", game.message());
        let _ = writeln!(out, "{}", game.hint());
    } else {
        let _ = writeln!(
            out,
            "{} to fire, shot {}",
            players[game.current_player()].name(),
            game.shots() + 1
        );
    }
    out
}

/// Legend printed under the interactive view.
pub const LEGEND: &str = "< - > ^ | v ship   X hit   o miss   . water";

/// Shown between games when automatic restart is off.
pub const RESTART_PROMPT: &str = "Press Enter for a new game, q to quit";

/// Block until the viewer answers [`RESTART_PROMPT`].
///
/// Returns `false` on `q` or end of input.
pub fn wait_for_restart<R: BufRead>(input: &mut R) -> std::io::Result<bool> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(!line.trim().eq_ignore_ascii_case("q"))
}
