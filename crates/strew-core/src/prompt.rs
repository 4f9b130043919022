//! Interactive prompting abstraction.
//!
//! The installer never touches stdin directly; it asks questions through a
//! `Prompter` so frontends can wire up a real terminal and tests can supply
//! scripted answers.

use std::collections::VecDeque;

/// Synchronous question/answer capability.
///
/// Implementations block until a full line of input is available and return
/// it with surrounding whitespace trimmed.
pub trait Prompter {
    fn ask(&mut self, question: &str) -> anyhow::Result<String>;
}

/// Prompter that replays a fixed sequence of answers.
///
/// Used by tests and available to frontends that want non-interactive runs.
/// Once the script is exhausted, every further question gets an empty answer.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, _question: &str) -> anyhow::Result<String> {
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Whether `answer` is exactly "y", case-insensitive.
///
/// Used where the default is "no": only an explicit yes proceeds.
pub fn is_affirmative_strict(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

/// Whether `answer` is exactly "n", case-insensitive.
///
/// Used where the default is "yes": only an explicit no declines. The
/// asymmetry with [`is_affirmative_strict`] is deliberate and user-visible.
pub fn is_negative_strict(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_affirmative_accepts_only_y() {
        assert!(is_affirmative_strict("y"));
        assert!(is_affirmative_strict("Y"));

        assert!(!is_affirmative_strict(""));
        assert!(!is_affirmative_strict("yes"));
        assert!(!is_affirmative_strict("n"));
        assert!(!is_affirmative_strict(" y"));
    }

    #[test]
    fn strict_negative_accepts_only_n() {
        assert!(is_negative_strict("n"));
        assert!(is_negative_strict("N"));

        assert!(!is_negative_strict(""));
        assert!(!is_negative_strict("no"));
        assert!(!is_negative_strict("y"));
    }

    #[test]
    fn scripted_prompter_replays_then_returns_empty() {
        let mut prompter = ScriptedPrompter::new(["y", "n"]);

        assert_eq!(prompter.ask("first?").unwrap(), "y");
        assert_eq!(prompter.ask("second?").unwrap(), "n");
        assert_eq!(prompter.ask("third?").unwrap(), "");
    }
}
