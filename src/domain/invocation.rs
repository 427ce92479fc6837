use std::ffi::{OsStr, OsString};

use super::AppError;

/// Token that separates quicksvc flags from the wrapped program invocation.
pub const SEPARATOR: &str = "--";

/// Raw command-line input before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Value of `--name`, if given.
    pub name: Option<String>,
    /// Positional tokens found before the separator. Always rejected.
    pub stray: Vec<String>,
    /// Tokens after the separator, or `None` when no separator was present.
    pub program: Option<Vec<String>>,
}

/// Split raw arguments at the first separator.
///
/// Returns the tokens before it and, if a separator was found, the tokens after it.
/// Later separators belong to the wrapped program and are kept verbatim.
pub fn split_at_separator<I, S>(args: I) -> (Vec<S>, Option<Vec<S>>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut head = Vec::new();
    let mut iter = args.into_iter();

    for arg in iter.by_ref() {
        if arg.as_ref() == SEPARATOR {
            return (head, Some(iter.collect()));
        }
        head.push(arg);
    }

    (head, None)
}

/// Decode post-separator tokens to UTF-8.
///
/// A non-UTF-8 program path is a `PathResolution` failure; any later token is
/// `InvalidArgumentEncoding`.
pub fn decode_program_tokens(tokens: Vec<OsString>) -> Result<Vec<String>, AppError> {
    tokens
        .into_iter()
        .enumerate()
        .map(|(index, token)| {
            token.into_string().map_err(|raw| {
                let lossy = raw.to_string_lossy().into_owned();
                if index == 0 {
                    AppError::PathResolution {
                        path: lossy,
                        reason: "path is not valid UTF-8".to_string(),
                    }
                } else {
                    AppError::InvalidArgumentEncoding(lossy)
                }
            })
        })
        .collect()
}
