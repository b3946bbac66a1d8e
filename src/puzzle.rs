//! Puzzle answer checking.
//!
//! A puzzle element's bound content is a config map holding the correct
//! answer and the wrong-answer message. Key names come from the plot
//! document's own language, so lookups go through configurable candidate
//! lists rather than fixed identifiers.

use serde::Serialize;

use crate::types::{Element, ElementKind};

/// Shown when a puzzle config carries no wrong-answer message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Wrong answer, try again.";

/// Candidate config key names for puzzle parameters, tried in order.
///
/// Defaults cover the original Chinese plot documents plus English keys.
#[derive(Debug, Clone)]
pub struct PuzzleKeys {
    /// Keys that may hold the correct answer.
    pub answer: Vec<String>,
    /// Keys that may hold the wrong-answer message.
    pub error_message: Vec<String>,
}

impl Default for PuzzleKeys {
    fn default() -> Self {
        Self {
            answer: vec!["answer".to_string(), "谜底".to_string()],
            error_message: vec!["errorMessage".to_string(), "错误提示文案".to_string()],
        }
    }
}

impl PuzzleKeys {
    fn lookup<'a>(&self, element: &'a Element, candidates: &[String]) -> Option<&'a str> {
        let content = element.content.as_ref()?;
        candidates.iter().find_map(|key| content.get_str(key))
    }

    /// The configured correct answer for a puzzle element, if any.
    pub fn answer_for<'a>(&self, element: &'a Element) -> Option<&'a str> {
        self.lookup(element, &self.answer)
    }

    /// The configured wrong-answer message for a puzzle element, if any.
    pub fn error_message_for<'a>(&self, element: &'a Element) -> Option<&'a str> {
        self.lookup(element, &self.error_message)
    }
}

/// Result of one answer submission.
///
/// A mismatch is the expected negative path, not an error: the message is
/// handed to the collaborator for display and no state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "result")]
pub enum SubmitOutcome {
    /// The guess matched the configured answer.
    Correct,
    /// The guess did not match; `message` is config-supplied or the default.
    Incorrect {
        /// Text for the collaborator to display.
        message: String,
    },
}

impl SubmitOutcome {
    /// True for [`SubmitOutcome::Correct`].
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmitOutcome::Correct)
    }
}

/// Check a guess against a puzzle element's configured answer.
///
/// The guess is trimmed and compared for exact string equality. Elements
/// that are not puzzles, have no bound content, or have no answer key can
/// never be solved.
pub fn check_answer(element: &Element, guess: &str, keys: &PuzzleKeys) -> SubmitOutcome {
    let configured = if element.kind == ElementKind::Puzzle {
        keys.answer_for(element)
    } else {
        None
    };

    match configured {
        Some(answer) if answer == guess.trim() => SubmitOutcome::Correct,
        _ => SubmitOutcome::Incorrect {
            message: keys
                .error_message_for(element)
                .unwrap_or(DEFAULT_ERROR_MESSAGE)
                .to_string(),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parser::parse_page;

    fn puzzle_page(config: &str) -> crate::types::Page {
        let raw = format!("<inputbox>{{q}}</inputbox>\n{{\nq = {{\n{config}\n}}\n}}\n");
        parse_page(&raw, 0).unwrap()
    }

    #[test]
    fn test_correct_answer() {
        let page = puzzle_page("answer = \"42\"\nerrorMessage = \"try again\"");
        let keys = PuzzleKeys::default();
        assert!(check_answer(page.puzzle().unwrap(), "42", &keys).is_correct());
        assert!(check_answer(page.puzzle().unwrap(), "  42  ", &keys).is_correct());
    }

    #[test]
    fn test_wrong_answer_uses_config_message() {
        let page = puzzle_page("answer = \"42\"\nerrorMessage = \"try again\"");
        let outcome = check_answer(page.puzzle().unwrap(), "41", &PuzzleKeys::default());
        assert_eq!(
            outcome,
            SubmitOutcome::Incorrect {
                message: "try again".to_string()
            }
        );
    }

    #[test]
    fn test_chinese_document_keys() {
        let page = puzzle_page("谜底 = \"月亮\"\n错误提示文案 = \"再想想\"");
        let keys = PuzzleKeys::default();
        assert!(check_answer(page.puzzle().unwrap(), "月亮", &keys).is_correct());
        let outcome = check_answer(page.puzzle().unwrap(), "太阳", &keys);
        assert_eq!(
            outcome,
            SubmitOutcome::Incorrect {
                message: "再想想".to_string()
            }
        );
    }

    #[test]
    fn test_missing_message_falls_back_to_default() {
        let page = puzzle_page("answer = \"x\"");
        let outcome = check_answer(page.puzzle().unwrap(), "y", &PuzzleKeys::default());
        assert_eq!(
            outcome,
            SubmitOutcome::Incorrect {
                message: DEFAULT_ERROR_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_answerless_puzzle_never_solves() {
        let page = parse_page("<inputbox>{q}</inputbox>\n", 0).unwrap();
        let outcome = check_answer(page.puzzle().unwrap(), "", &PuzzleKeys::default());
        assert!(!outcome.is_correct());
    }
}
