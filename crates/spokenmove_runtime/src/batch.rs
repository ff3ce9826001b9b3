//! Line-by-line translation for non-interactive use.

use std::io::{BufRead, Write};

use spokenmove_foundation::{Error, ErrorKind, Result};

use crate::session::Session;

/// Outcome of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Lines translated.
    pub translated: usize,
    /// Lines that failed to translate.
    pub failed: usize,
}

impl BatchReport {
    /// Returns true if every non-blank line translated.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Translates each non-blank line of `input`.
///
/// SAN goes to `out`, one line per input line. Failures go to `err` as
/// `line N: message` and do not stop the run.
///
/// # Errors
///
/// Returns an `IoError` if reading input or writing output fails.
pub fn run_batch<R, O, E>(
    session: &mut Session,
    input: R,
    out: &mut O,
    err: &mut E,
) -> Result<BatchReport>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut report = BatchReport::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(io_error)?;
        if line.trim().is_empty() {
            continue;
        }

        match session.translate(&line) {
            Ok(notation) => {
                writeln!(out, "{notation}").map_err(io_error)?;
                report.translated += 1;
            }
            Err(e) => {
                writeln!(err, "line {}: {e}", index + 1).map_err(io_error)?;
                report.failed += 1;
            }
        }
    }

    out.flush().map_err(io_error)?;
    Ok(report)
}

fn io_error(e: std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(e.to_string()))
}
