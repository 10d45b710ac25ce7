//! Splicing completions into an edited text field.
//!
//! A field such as the command line holds several space-separated pieces;
//! only the last one is completed.

use crate::candidate::{CompletionDomain, Completion};
use crate::engine::Completer;

/// Result of completing the last piece of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Candidates to show for the completed piece.
    pub completion: Completion,
    /// The field text after completion.
    pub text: String,
}

impl Splice {
    /// Whether completion made progress on the text.
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

fn split_last_piece(text: &str) -> (&str, &str) {
    match text.rfind(' ') {
        Some(idx) => (&text[..=idx], &text[idx + 1..]),
        None => ("", text),
    }
}

/// Completes the last space-separated piece of `text` with `complete`.
///
/// The text is left alone when the candidates share no prefix or when
/// the prefix is the piece itself. A prefix naming a directory is
/// completed once more so the candidates list its contents.
pub fn complete_last_piece<F>(text: &str, complete: F) -> Splice
where
    F: Fn(&str) -> Completion,
{
    let (head, piece) = split_last_piece(text);
    let mut completion = complete(piece);
    let prefix = completion.common_prefix.clone();

    if prefix.is_empty() || prefix == piece {
        return Splice {
            completion,
            text: text.to_string(),
        };
    }

    let mut replacement = prefix;
    if replacement.ends_with('/') {
        completion = complete(&replacement);
        if !completion.common_prefix.is_empty() {
            replacement = completion.common_prefix.clone();
        }
    }

    Splice {
        completion,
        text: format!("{head}{replacement}"),
    }
}

/// Replaces the last piece of `text` with an accepted candidate value,
/// followed by a space.
pub fn accept_candidate(text: &str, value: &str) -> String {
    let (head, _) = split_last_piece(text);
    format!("{head}{value} ")
}

impl Completer {
    /// Completes the last piece of a field. `None` infers the domain from
    /// the piece.
    pub fn complete_text(&self, text: &str, domain: Option<CompletionDomain>) -> Splice {
        match domain {
            Some(CompletionDomain::Path) => complete_last_piece(text, |t| self.complete_path(t)),
            Some(CompletionDomain::OptionName) => {
                complete_last_piece(text, |t| self.complete_option_name(t))
            }
            None => complete_last_piece(text, |t| self.complete_any(t)),
        }
    }
}
