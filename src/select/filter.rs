//! Filterable single-choice menu state, independent of any terminal.

use crate::commit::CommitCandidate;

/// Whether a candidate matches the search query.
///
/// Case-insensitive substring match against the title and description
/// joined by a space. An empty query matches everything.
pub fn matches(candidate: &CommitCandidate, query: &str) -> bool {
    let haystack = format!("{} {}", candidate.title, candidate.description).to_lowercase();
    haystack.contains(&query.to_lowercase())
}

/// User input understood by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Char(char),
    Backspace,
    Up,
    Down,
    Confirm,
    Cancel,
}

/// Result of feeding one input to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStep {
    Continue,
    /// Index into the full candidate list.
    Selected(usize),
    Cancelled,
}

/// Search query, the candidates it leaves visible, and the highlighted row.
#[derive(Debug)]
pub struct Menu<'a> {
    candidates: &'a [CommitCandidate],
    query: String,
    visible: Vec<usize>,
    cursor: usize,
}

impl<'a> Menu<'a> {
    pub fn new(candidates: &'a [CommitCandidate]) -> Self {
        Self {
            candidates,
            query: String::new(),
            visible: (0..candidates.len()).collect(),
            cursor: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &'a [CommitCandidate] {
        self.candidates
    }

    /// Indices of the candidates that match the current query, in order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Index of the highlighted candidate, if any row is visible.
    pub fn highlighted(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    pub fn handle(&mut self, input: MenuInput) -> MenuStep {
        match input {
            MenuInput::Char(c) => {
                self.query.push(c);
                self.refilter();
            }
            MenuInput::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            MenuInput::Up => self.cursor = self.cursor.saturating_sub(1),
            MenuInput::Down => {
                if self.cursor + 1 < self.visible.len() {
                    self.cursor += 1;
                }
            }
            MenuInput::Confirm => {
                if let Some(index) = self.highlighted() {
                    return MenuStep::Selected(index);
                }
            }
            MenuInput::Cancel => return MenuStep::Cancelled,
        }
        MenuStep::Continue
    }

    fn refilter(&mut self) {
        let query = &self.query;
        self.visible = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| matches(c, query))
            .map(|(i, _)| i)
            .collect();
        self.cursor = 0;
    }
}
