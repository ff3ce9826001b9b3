//! Syntax highlighting for the REPL.

use std::borrow::Cow;

/// Highlighter for spoken chess moves and REPL commands.
pub struct SpokenHighlighter {}

impl SpokenHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        // Meta-commands: the command word is cyan, arguments plain
        if let Some(rest) = line.strip_prefix(':') {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let (command, args) = rest.split_at(end);
            return Cow::Owned(format!("\x1b[36m:{command}\x1b[0m{args}"));
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if !c.is_alphanumeric() {
                result.push(c);
                continue;
            }

            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if next.is_alphanumeric() {
                    end = i + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let word = &line[start..end];
            match word_color(word) {
                Some(color) => {
                    result.push_str(color);
                    result.push_str(word);
                    result.push_str("\x1b[0m");
                }
                None => result.push_str(word),
            }
        }

        Cow::Owned(result)
    }
}

impl Default for SpokenHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the color for one word, if it has one.
fn word_color(word: &str) -> Option<&'static str> {
    let lower = word.to_ascii_lowercase();
    let color = match lower.as_str() {
        // Pieces - bold
        "king" | "queen" | "rook" | "bishop" | "knight" | "pawn" => "\x1b[1m",

        // Actions - yellow
        "captures" | "capture" | "takes" | "take" | "moves" | "move" | "to" | "en"
        | "passant" | "promote" => "\x1b[33m",

        // Suffixes - red
        "check" | "checkmate" | "mate" => "\x1b[31m",

        // Castling and resignation - green
        "castle" | "kingside" | "queenside" | "black" | "white" | "resigns" => "\x1b[32m",

        // Squares - magenta
        _ if is_square(&lower) => "\x1b[35m",

        _ => return None,
    };
    Some(color)
}

/// Returns true for a file letter followed by a rank digit.
fn is_square(word: &str) -> bool {
    let bytes = word.as_bytes();
    bytes.len() == 2 && (b'a'..=b'h').contains(&bytes[0]) && (b'1'..=b'8').contains(&bytes[1])
}
