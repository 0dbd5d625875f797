mod completer;
pub mod error;
mod literal;
pub mod options;
mod stack;
pub mod token;
pub mod trace;

pub use completer::{Completer, ParseState};
pub use error::{CompleteError, CompleteErrorKind};
pub use options::Options;
pub use token::{Letter, Token};
pub use trace::TraceEvent;

/// Complete a possibly truncated JSON string in one call.
/// Returns the shortest valid JSON text that has `input` as a literal prefix.
pub fn complete_str(input: &str) -> Result<String, CompleteError> {
    let mut completer = Completer::new();
    completer.append(input)?;
    Ok(completer.complete())
}

/// Convenience: feed a sequence of chunks (split anywhere, including
/// mid-keyword or mid-escape) and return the completion of the whole.
pub fn complete_chunks<'a, I>(chunks: I, opts: &Options) -> Result<String, CompleteError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut completer = Completer::with_options(opts.clone());
    for chunk in chunks {
        completer.append(chunk)?;
    }
    Ok(completer.complete())
}

#[cfg(feature = "serde")]
/// Complete and then parse into `serde_json::Value`.
pub fn complete_to_value(
    input: &str,
    opts: &Options,
) -> Result<serde_json::Value, CompleteError> {
    let mut completer = Completer::with_options(opts.clone());
    completer.append(input)?;
    let text = completer.complete();
    serde_json::from_str(&text).map_err(|e| {
        CompleteError::new(
            CompleteErrorKind::Parse(format!("completed output failed to parse: {}", e)),
            input.len(),
        )
    })
}

#[cfg(test)]
mod tests;
