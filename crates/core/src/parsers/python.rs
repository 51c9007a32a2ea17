//! Python outline parser
//!
//! Each line is trimmed and classified by a fixed precedence of prefix and
//! substring tests. Four flags carry context from one line to the next;
//! nothing else is remembered and indentation is never measured.

use crate::models::{EntryKind, Language, OutlineEntry};
use crate::parsers::OutlineParser;
use serde::{Deserialize, Serialize};

const OPENING_BRACKETS: [char; 3] = ['(', '[', '{'];
const CLOSING_BRACKETS: [char; 3] = [')', ']', '}'];

/// When a captured assignment line starts a multi-line continuation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuationRule {
    /// The line ends with `(`, `[` or `{`
    #[default]
    OpenBracket,

    /// The line does not end with `)`, `]` or `}`. Any single-line
    /// assignment such as `x = 1` opens a continuation, which then hides
    /// following `def` and import lines until some line ends with a
    /// closing bracket.
    Legacy,
}

impl ContinuationRule {
    fn opens(&self, line: &str) -> bool {
        match self {
            ContinuationRule::OpenBracket => line.ends_with(OPENING_BRACKETS),
            ContinuationRule::Legacy => !line.ends_with(CLOSING_BRACKETS),
        }
    }
}

/// Scratch state for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionState {
    pub in_class: bool,
    pub in_method: bool,
    pub in_assignment: bool,

    /// Capture gate: assignments are only emitted while this is set
    pub capture_variables: bool,

    continuation: ContinuationRule,
}

impl Default for ExtractionState {
    fn default() -> Self {
        Self::new(ContinuationRule::default())
    }
}

impl ExtractionState {
    pub fn new(continuation: ContinuationRule) -> Self {
        Self {
            in_class: false,
            in_method: false,
            in_assignment: false,
            capture_variables: true,
            continuation,
        }
    }

    /// Classify one line, updating the flags
    ///
    /// `line` may carry surrounding whitespace; it is trimmed here. Returns
    /// the kind and text of the entry to emit, if any.
    pub fn classify(&mut self, line: &str) -> Option<(EntryKind, String)> {
        let stripped = line.trim();

        if stripped.starts_with("class ") {
            self.in_class = true;
            self.capture_variables = true;
            return Some((EntryKind::Class, stripped.to_string()));
        }

        if stripped.starts_with("def __init__") {
            self.in_method = true;
            self.capture_variables = true;
            return Some((EntryKind::Method, stripped.to_string()));
        }

        if stripped.starts_with("def ") && !self.in_assignment {
            self.in_method = true;
            self.capture_variables = false;
            return Some((EntryKind::Method, stripped.to_string()));
        }

        if self.in_class && stripped.contains(" = ") {
            // Inside a method only `self.` attributes count; other lines are
            // consumed here without an entry.
            if !self.in_method || stripped.starts_with("self.") {
                return self.assignment(stripped);
            }
            return None;
        }

        if self.in_assignment {
            if stripped.ends_with(CLOSING_BRACKETS) {
                self.in_assignment = false;
            }
            return None;
        }

        if stripped.starts_with("import ")
            || stripped.starts_with("from ")
            || (stripped.starts_with("__") && stripped.ends_with("__"))
        {
            return Some((EntryKind::Import, stripped.to_string()));
        }

        None
    }

    fn assignment(&mut self, stripped: &str) -> Option<(EntryKind, String)> {
        let target = stripped.split_once('=').map_or(stripped, |(lhs, _)| lhs).trim();
        let target = target.split_once('(').map_or(target, |(head, _)| head).trim();

        if self.continuation.opens(stripped) {
            self.in_assignment = true;
        }

        self.capture_variables
            .then(|| (EntryKind::Assignment, target.to_string()))
    }
}

/// Split `source` into lines ending at `\n`, `\r\n` or a bare `\r`
///
/// Terminators are dropped and a trailing terminator does not produce an
/// empty final line.
pub fn split_lines<'a>(source: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut rest = source;

    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        match rest.find(['\r', '\n']) {
            Some(pos) => {
                let line = &rest[..pos];
                let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Outline `source` with the default continuation rule
pub fn get_outline(source: &str) -> Vec<OutlineEntry> {
    get_outline_with(source, ContinuationRule::default())
}

/// Outline `source` with an explicit continuation rule
pub fn get_outline_with(source: &str, continuation: ContinuationRule) -> Vec<OutlineEntry> {
    let mut state = ExtractionState::new(continuation);

    split_lines(source)
        .enumerate()
        .filter_map(|(idx, line)| {
            state
                .classify(line)
                .map(|(kind, text)| OutlineEntry::new(kind, text, idx + 1))
        })
        .collect()
}

/// Python parser implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonParser {
    continuation: ContinuationRule,
}

impl PythonParser {
    pub fn new(continuation: ContinuationRule) -> Self {
        Self { continuation }
    }
}

impl OutlineParser for PythonParser {
    fn language(&self) -> Language {
        Language::Python
    }

    fn extract(&self, source: &str) -> Vec<OutlineEntry> {
        get_outline_with(source, self.continuation)
    }
}
