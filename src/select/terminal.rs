//! Live terminal rendering of the candidate menu.
//!
//! The menu opens in search mode: typing narrows the list, arrow keys move
//! the highlight, Enter confirms and Escape or Ctrl-C aborts. Only the
//! highlighted candidate shows its description.

use std::io;

use console::{Key, Term, measure_text_width, style, truncate_str};
use tracing::debug;

use crate::commit::CommitCandidate;
use crate::error::SelectError;
use crate::select::CandidateSelector;
use crate::select::filter::{Menu, MenuInput, MenuStep};

const LABEL: &str = "Select commit message";

/// Selector that draws on stderr so stdout stays free for git's output.
pub struct TerminalSelector {
    term: Term,
}

impl TerminalSelector {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn interact(&self, menu: &mut Menu<'_>) -> Result<usize, SelectError> {
        let mut drawn = 0;

        loop {
            let width = usize::from(self.term.size().1);
            let lines = render(menu, width);
            self.clear(drawn)?;
            for line in &lines {
                self.term.write_line(line).map_err(SelectError::Terminal)?;
            }
            drawn = lines.len();

            let key = match self.term.read_key() {
                Ok(key) => key,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    self.clear(drawn)?;
                    return Err(SelectError::Interrupted);
                }
                Err(e) => return Err(SelectError::Terminal(e)),
            };

            let Some(input) = map_key(key) else {
                continue;
            };

            match menu.handle(input) {
                MenuStep::Continue => {}
                MenuStep::Selected(index) => {
                    self.clear(drawn)?;
                    let title = single_line(&menu.candidates()[index].title);
                    self.term
                        .write_line(&format!("{} {}", style("✔").green(), style(title).green()))
                        .map_err(SelectError::Terminal)?;
                    return Ok(index);
                }
                MenuStep::Cancelled => {
                    self.clear(drawn)?;
                    return Err(SelectError::Interrupted);
                }
            }
        }
    }

    fn clear(&self, lines: usize) -> Result<(), SelectError> {
        if lines > 0 {
            self.term
                .clear_last_lines(lines)
                .map_err(SelectError::Terminal)?;
        }
        Ok(())
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSelector for TerminalSelector {
    fn select(&self, candidates: &[CommitCandidate]) -> Result<usize, SelectError> {
        if !self.term.is_term() {
            return Err(SelectError::NoInteractiveTerminal);
        }

        let mut menu = Menu::new(candidates);
        self.term.hide_cursor().map_err(SelectError::Terminal)?;
        let result = self.interact(&mut menu);
        if let Err(e) = self.term.show_cursor() {
            debug!("Failed to restore cursor: {}", e);
        }
        result
    }
}

fn map_key(key: Key) -> Option<MenuInput> {
    match key {
        Key::Enter => Some(MenuInput::Confirm),
        Key::Escape | Key::CtrlC => Some(MenuInput::Cancel),
        Key::ArrowUp => Some(MenuInput::Up),
        Key::ArrowDown | Key::Tab => Some(MenuInput::Down),
        Key::Backspace => Some(MenuInput::Backspace),
        Key::Char('\u{3}') => Some(MenuInput::Cancel),
        Key::Char(c) if !c.is_control() => Some(MenuInput::Char(c)),
        _ => None,
    }
}

/// Lay out one frame of the menu: the search line, one row per visible
/// candidate with every row shown, then the details of the highlighted one.
///
/// Every returned line fits in `width` columns, so the line count is also
/// the number of terminal rows the frame occupies.
pub fn render(menu: &Menu<'_>, width: usize) -> Vec<String> {
    let width = width.max(1);
    let fit = |line: String| truncate_str(&line, width, "…").into_owned();

    let mut lines = vec![fit(format!(
        "{} {} Search: {}",
        style("?").yellow(),
        style(LABEL).bold(),
        menu.query()
    ))];

    let highlighted = menu.highlighted();
    if menu.visible().is_empty() {
        lines.push(fit(style("  No matching commit messages").dim().to_string()));
    }
    for &index in menu.visible() {
        let title = single_line(&menu.candidates()[index].title);
        if Some(index) == highlighted {
            lines.push(fit(format!("{} {}", style("→").cyan(), style(title).cyan())));
        } else {
            lines.push(fit(format!("  {}", title)));
        }
    }

    if let Some(index) = highlighted {
        let description = &menu.candidates()[index].description;
        if !description.trim().is_empty() {
            lines.push(String::new());
            lines.push(fit(style("--------- Details ----------").dim().to_string()));
            for line in description.lines() {
                lines.extend(wrap(line, width));
            }
        }
    }

    lines
}

/// Collapse line breaks so a title always occupies one row.
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Break `line` into rows of at most `width` columns.
fn wrap(line: &str, width: usize) -> Vec<String> {
    let line = line.trim_end_matches('\r').replace('\t', "    ");
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;
    let mut buf = [0u8; 4];

    for c in line.chars() {
        let w = measure_text_width(c.encode_utf8(&mut buf));
        if used + w > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(c);
        used += w;
    }
    rows.push(row);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    fn candidates() -> Vec<CommitCandidate> {
        vec![
            CommitCandidate {
                title: "feat: add X".to_string(),
                description: "Implements X.\nAlso wires it into the CLI.".to_string(),
            },
            CommitCandidate {
                title: "fix: handle Y".to_string(),
                description: "Y used to panic.".to_string(),
            },
        ]
    }

    fn plain(lines: Vec<String>) -> Vec<String> {
        lines
            .into_iter()
            .map(|l| strip_ansi_codes(&l).into_owned())
            .collect()
    }

    #[test]
    fn test_render_highlighted_row_has_details() {
        let all = candidates();
        let menu = Menu::new(&all);
        let lines = plain(render(&menu, 80));

        assert_eq!(lines[0], "? Select commit message Search: ");
        assert_eq!(lines[1], "→ feat: add X");
        assert_eq!(lines[2], "  fix: handle Y");
        assert!(lines.contains(&"Implements X.".to_string()));
        assert!(lines.contains(&"Also wires it into the CLI.".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Y used to panic.")));
    }

    #[test]
    fn test_render_follows_cursor() {
        let all = candidates();
        let mut menu = Menu::new(&all);
        menu.handle(MenuInput::Down);
        let lines = plain(render(&menu, 80));

        assert_eq!(lines[1], "  feat: add X");
        assert_eq!(lines[2], "→ fix: handle Y");
        assert!(lines.contains(&"Y used to panic.".to_string()));
    }

    #[test]
    fn test_render_no_matches() {
        let all = candidates();
        let mut menu = Menu::new(&all);
        menu.handle(MenuInput::Char('z'));
        let lines = plain(render(&menu, 80));

        assert_eq!(lines[0], "? Select commit message Search: z");
        assert_eq!(lines[1], "  No matching commit messages");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_render_lines_fit_terminal_width() {
        let all = vec![
            CommitCandidate {
                title: "feat: ".to_string() + &"x".repeat(100),
                description: "word ".repeat(30),
            },
            CommitCandidate {
                title: "a".to_string(),
                description: String::new(),
            },
        ];
        for width in [10, 40, 80] {
            let mut menu = Menu::new(&all);
            for c in "a very long search query typed by the user".chars() {
                menu.handle(MenuInput::Char(c));
            }
            for line in render(&menu, width) {
                assert!(
                    console::measure_text_width(&line) <= width,
                    "line of {} columns exceeds width {}: {:?}",
                    console::measure_text_width(&line),
                    width,
                    line
                );
            }

            let menu = Menu::new(&all);
            for line in render(&menu, width) {
                assert!(console::measure_text_width(&line) <= width);
            }
        }
    }

    #[test]
    fn test_render_wraps_description_without_dropping_text() {
        let description = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let all = vec![CommitCandidate {
            title: "feat: add X".to_string(),
            description: description.to_string(),
        }];
        let menu = Menu::new(&all);
        let lines = plain(render(&menu, 20));

        let details = lines
            .iter()
            .position(|l| l.contains("Details"))
            .expect("details header");
        let body: String = lines[details + 1..].concat();
        assert_eq!(body, description);
        assert!(lines.len() > details + 2);
    }

    #[test]
    fn test_render_title_with_newline_is_one_row() {
        let all = vec![CommitCandidate {
            title: "feat: add X\nsecond line".to_string(),
            description: String::new(),
        }];
        let menu = Menu::new(&all);
        let lines = plain(render(&menu, 80));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "→ feat: add X second line");
    }

    #[test]
    fn test_wrap_expands_tabs_and_splits_rows() {
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("\tab", 4), vec!["    ".to_string(), "ab".to_string()]);
        assert_eq!(
            wrap("abcdefgh", 3),
            vec!["abc".to_string(), "def".to_string(), "gh".to_string()]
        );
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(Key::Enter), Some(MenuInput::Confirm));
        assert_eq!(map_key(Key::Escape), Some(MenuInput::Cancel));
        assert_eq!(map_key(Key::Char('\u{3}')), Some(MenuInput::Cancel));
        assert_eq!(map_key(Key::CtrlC), Some(MenuInput::Cancel));
        assert_eq!(map_key(Key::Char('a')), Some(MenuInput::Char('a')));
        assert_eq!(map_key(Key::ArrowDown), Some(MenuInput::Down));
        assert_eq!(map_key(Key::Home), None);
    }
}
