//! The spoken chess move grammar.
//!
//! Rule precedence matters throughout: `piece_move` tries the most specific
//! shape (departure and action) before the bare `piece destination` form,
//! `pawn_move` tries `en_passant` before a plain capture, and `checkmate` is
//! tried before `check` so "checkmate" is not read as "check" plus residue.

use spokenmove_foundation::{CastleSide, Error, ErrorKind, Piece, Result, Side};

use crate::en_passant;
use crate::grammar::{Captures, CharClass, Element, GrammarDef, RuleDef, concat, discard};

/// Words the grammar understands, for completion and highlighting.
pub const KEYWORDS: &[&str] = &[
    "king",
    "queen",
    "rook",
    "bishop",
    "knight",
    "captures",
    "capture",
    "takes",
    "take",
    "moves to",
    "move to",
    "to",
    "en passant",
    "promote to",
    "checkmate",
    "mate",
    "check",
    "castle",
    "kingside",
    "queenside",
    "black",
    "white",
    "resigns",
];

/// Piece words. Every alternative of `piece` matches exactly one of these.
const PIECE_WORDS: [&str; 5] = ["king", "queen", "rook", "bishop", "knight"];

fn lit(text: &str) -> Element {
    Element::literal(text)
}

fn rule(name: &str) -> Element {
    Element::rule(name)
}

fn ws() -> Element {
    Element::rule("whitespace")
}

/// Builds the spoken move grammar.
#[must_use]
pub fn chess_grammar() -> GrammarDef {
    let piece = PIECE_WORDS
        .iter()
        .fold(RuleDef::new("piece"), |def, word| def.alt([lit(word)], piece_letter));

    GrammarDef::new("start")
        .rule(RuleDef::new("start").alt([ws(), rule("move"), ws()], concat))
        .rule(
            RuleDef::new("move")
                .alt([rule("base_move"), ws(), rule("check_suffix")], concat)
                .alt([rule("base_move")], concat)
                .alt([rule("resign")], concat),
        )
        .rule(
            RuleDef::new("base_move")
                .alt([rule("piece_move")], concat)
                .alt([rule("pawn_move")], concat)
                .alt([rule("castle")], concat),
        )
        .rule(
            RuleDef::new("check_suffix")
                .alt([rule("checkmate")], concat)
                .alt([rule("check")], concat),
        )
        .rule(
            RuleDef::new("piece_move")
                .alt(
                    [
                        rule("piece"),
                        ws(),
                        rule("departure"),
                        ws(),
                        rule("action"),
                        ws(),
                        rule("destination"),
                    ],
                    concat,
                )
                .alt(
                    [
                        rule("piece"),
                        ws(),
                        rule("departure"),
                        ws(),
                        rule("destination"),
                    ],
                    concat,
                )
                .alt(
                    [rule("piece"), ws(), rule("action"), ws(), rule("destination")],
                    concat,
                )
                .alt([rule("piece"), ws(), rule("destination")], concat),
        )
        .rule(
            RuleDef::new("pawn_move")
                .alt([rule("en_passant")], concat)
                .alt([rule("pawn_capture"), ws(), rule("pawn_promotion")], concat)
                .alt([rule("destination"), ws(), rule("pawn_promotion")], concat)
                .alt([rule("pawn_capture")], concat)
                .alt([rule("destination")], concat),
        )
        .rule(RuleDef::new("en_passant").alt(
            [
                rule("file"),
                ws(),
                rule("capture"),
                ws(),
                rule("file"),
                rule("rank"),
                ws(),
                lit("en passant"),
            ],
            en_passant_capture,
        ))
        .rule(RuleDef::new("pawn_capture").alt(
            [
                rule("file"),
                ws(),
                rule("capture"),
                ws(),
                rule("destination"),
            ],
            pawn_capture,
        ))
        .rule(RuleDef::new("pawn_promotion").alt(
            [lit("promote to"), ws(), rule("piece")],
            promotion,
        ))
        .rule(RuleDef::new("check").alt([lit("check")], check))
        .rule(
            RuleDef::new("checkmate")
                .alt([lit("checkmate")], checkmate)
                .alt([lit("mate")], checkmate),
        )
        .rule(RuleDef::new("castle").alt([lit("castle"), ws(), rule("castle_side")], castle))
        .rule(
            RuleDef::new("castle_side")
                .alt([lit("kingside")], concat)
                .alt([lit("queenside")], concat),
        )
        .rule(RuleDef::new("resign").alt([rule("player"), ws(), lit("resigns")], resign))
        .rule(
            RuleDef::new("player")
                .alt([lit("black")], concat)
                .alt([lit("white")], concat),
        )
        .rule(
            RuleDef::new("departure")
                .alt([rule("square")], concat)
                .alt([rule("file")], concat)
                .alt([rule("rank")], concat),
        )
        .rule(RuleDef::new("destination").alt([rule("square")], concat))
        .rule(RuleDef::new("square").alt([rule("file"), rule("rank")], concat))
        .rule(RuleDef::new("rank").alt(
            [Element::Class(CharClass::range("rank", '1'..='8'))],
            concat,
        ))
        .rule(RuleDef::new("file").alt(
            [Element::Class(CharClass::range("file", 'a'..='h').ignore_case())],
            concat,
        ))
        .rule(piece)
        .rule(
            RuleDef::new("action")
                .alt([rule("capture")], concat)
                .alt([rule("to")], concat),
        )
        .rule(
            RuleDef::new("capture")
                .alt([lit("captures")], capture)
                .alt([lit("capture")], capture)
                .alt([lit("takes")], capture)
                .alt([lit("take")], capture),
        )
        .rule(
            RuleDef::new("to")
                .alt([lit("moves to")], discard)
                .alt([lit("move to")], discard)
                .alt([lit("to")], discard),
        )
        .rule(RuleDef::new("whitespace").alt([Element::Repeat(CharClass::space())], discard))
}

// =============================================================================
// Actions
// =============================================================================

fn internal(what: &str, captures: &Captures<'_>) -> Error {
    Error::new(ErrorKind::Internal(format!(
        "{what} action got {:?}",
        captures.concat()
    )))
}

fn piece_letter(c: &Captures<'_>) -> Result<String> {
    Piece::from_name(c.value(0))
        .and_then(Piece::letter)
        .map(String::from)
        .ok_or_else(|| internal("piece", c))
}

fn capture(_: &Captures<'_>) -> Result<String> {
    Ok("x".to_string())
}

fn check(_: &Captures<'_>) -> Result<String> {
    Ok("+".to_string())
}

fn checkmate(_: &Captures<'_>) -> Result<String> {
    Ok("#".to_string())
}

fn promotion(c: &Captures<'_>) -> Result<String> {
    Ok(format!("={}", c.value(2)))
}

fn pawn_capture(c: &Captures<'_>) -> Result<String> {
    Ok(format!("{}x{}", c.value(0), c.value(4)))
}

/// `file ws capture ws file rank ws "en passant"`
fn en_passant_capture(c: &Captures<'_>) -> Result<String> {
    let captured = c.value(5).chars().next().ok_or_else(|| internal("en passant", c))?;
    let landing = en_passant::landing_rank(captured)?;
    Ok(format!("{}x{}{landing}", c.value(0), c.value(4)))
}

fn castle(c: &Captures<'_>) -> Result<String> {
    CastleSide::from_name(c.value(2))
        .map(|side| side.notation().to_string())
        .ok_or_else(|| internal("castle", c))
}

fn resign(c: &Captures<'_>) -> Result<String> {
    Side::from_name(c.value(0))
        .map(|side| side.resignation_result().to_string())
        .ok_or_else(|| internal("resign", c))
}
