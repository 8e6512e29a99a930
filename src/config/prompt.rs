use crate::core::{RollSource, Storage};
use crate::utils::error::{DiceError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Asks for the roll data filename until one opens.
///
/// Filenames are read as whitespace-separated words, so several names on
/// one line are tried in turn. Each failure prints `Could not open <name>.` on `err`. After
/// `max_attempts` consecutive failures it prints `Program is exiting.` and
/// gives up with [`DiceError::OpenAttemptsExhausted`].
pub fn prompt_for_rolls<S, R, W, E>(
    storage: &S,
    input: &mut R,
    out: &mut W,
    err: &mut E,
    max_attempts: u32,
) -> Result<RollSource>
where
    S: Storage,
    R: BufRead,
    W: Write,
    E: Write,
{
    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;
    let mut pending = VecDeque::new();

    loop {
        writeln!(out, "Roll data filename:")?;
        out.flush()?;

        let filename = read_filename(input, &mut pending)?.ok_or(DiceError::PromptClosed)?;

        match storage.read_file(&filename) {
            Ok(data) => {
                tracing::info!("Opened roll data {} ({} bytes)", filename, data.len());
                return Ok(RollSource::from_bytes(filename, &data));
            }
            Err(e) => {
                attempts += 1;
                tracing::warn!("Open attempt {}/{} failed: {}", attempts, max_attempts, e);
                writeln!(err, "Could not open {}.", filename)?;

                if attempts >= max_attempts {
                    writeln!(err, "Program is exiting.")?;
                    return Err(DiceError::OpenAttemptsExhausted {
                        attempts,
                        last: filename,
                    });
                }
            }
        }
    }
}

/// Opens a filename given up front; no retries.
pub fn open_rolls<S: Storage>(storage: &S, filename: &str) -> Result<RollSource> {
    let data = storage.read_file(filename)?;
    tracing::info!("Opened roll data {} ({} bytes)", filename, data.len());
    Ok(RollSource::from_bytes(filename, &data))
}

// Next whitespace-delimited word; words left over on a line wait in `pending`.
fn read_filename<R: BufRead>(
    input: &mut R,
    pending: &mut VecDeque<String>,
) -> Result<Option<String>> {
    let mut line = String::new();
    loop {
        if let Some(word) = pending.pop_front() {
            return Ok(Some(word));
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        pending.extend(line.split_whitespace().map(str::to_string));
    }
}
