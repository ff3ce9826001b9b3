//! Built-in aliases for common speech recognition mistakes.
//!
//! Browser speech engines hear chess moves as everyday English: "rook" comes
//! back as "rock" or "truck", "h" as "age", "4" as "for". This table maps each
//! canonical token to the words observed in its place.

use crate::lexicon::Lexicon;

/// Canonical token → misrecognitions, tried in this order.
pub const SPEECH_ALIASES: &[(&str, &[&str])] = &[
    // Pieces
    ("knight", &["night"]),
    (
        "rook",
        &[
            "brooke", "brooks", "brookdale", "brook", "work", "route", "rough", "trucks", "truck",
            "ruck", "rupp", "rupt", "rocket", "rockstar", "rock", "rugs", "rug", "look", "ruff",
        ],
    ),
    ("king", &["teen"]),
    // Files
    ("a", &["alpha", "office", "off of", "also"]),
    ("b", &["bravo", "beta", "beat", "bee", "be"]),
    ("c", &["charlie", "sea", "see"]),
    ("d", &["delta", "the"]),
    ("e", &["echo", "eat"]),
    ("f", &["foxtrot", "at", "of"]),
    ("g", &["golf", "gulf"]),
    ("h", &["hotel", "stage", "age", "its", "each"]),
    // Ranks
    ("2", &["too"]),
    ("4", &["force", "fork", "for", "far", "park", "store"]),
    ("5", &["v", "psi"]),
    ("6", &["sex"]),
];

/// Returns the built-in speech alias lexicon.
///
/// # Panics
///
/// Never in practice: every entry in [`SPEECH_ALIASES`] is non-empty, which
/// is all the lexicon builder checks.
#[must_use]
pub fn speech_aliases() -> Lexicon {
    SPEECH_ALIASES
        .iter()
        .fold(Lexicon::builder(), |builder, (token, aliases)| {
            builder.aliases(token, aliases.iter())
        })
        .build()
        .expect("built-in speech aliases are non-empty")
}
