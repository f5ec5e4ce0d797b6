//! Terminal-oriented Unicode board renderer.
//!
//! Debug view of a board with an optional set of highlighted squares (for
//! example the legal destinations of a selected piece). Highlighted empty
//! squares print `*`, highlighted occupied squares are bracketed.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_board(board: &Board, highlights: SquareSet) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let Some(square) = Square::new(file, rank) else {
                continue;
            };
            let marked = highlights.contains(square);
            match (board.get(square), marked) {
                (Some(piece), true) => {
                    out.push('[');
                    out.push(piece_to_unicode(piece));
                    out.push(']');
                }
                (Some(piece), false) => {
                    out.push(' ');
                    out.push(piece_to_unicode(piece));
                    out.push(' ');
                }
                (None, true) => out.push_str(" * "),
                (None, false) => out.push_str(" · "),
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h\n");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
