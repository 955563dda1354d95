//! Prompt and presentation seam for the interactive session.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use crate::render::{self, SearchHit};

/// Questions the session asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Welcome,
    Group,
    Term,
    Value,
}

impl Question {
    fn prompt(self) -> &'static str {
        match self {
            Question::Welcome => {
                "Select search options:\n  * Press 1 to search\n  * Press 2 to view a list of searchable fields\n  * Type 'quit' to exit\n> "
            }
            Question::Group => "Enter group number: ",
            Question::Term => "Enter search term: ",
            Question::Value => "Enter search value: ",
        }
    }
}

/// Everything the session needs from a user interface.
///
/// `ask` returns `None` when input is exhausted.
pub trait Ui {
    fn ask(&mut self, question: Question) -> io::Result<Option<String>>;
    fn show_groups(&mut self, groups: &[String]) -> io::Result<()>;
    fn show_results(&mut self, hits: &[SearchHit]) -> io::Result<()>;
    fn show_terms(&mut self, terms: &BTreeMap<String, Vec<String>>) -> io::Result<()>;
    fn show_error(&mut self, message: &str) -> io::Result<()>;
}

/// Line-oriented terminal UI over any reader and writer.
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect output in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Ui for TerminalUi<R, W> {
    fn ask(&mut self, question: Question) -> io::Result<Option<String>> {
        write!(self.output, "{}", question.prompt())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show_groups(&mut self, groups: &[String]) -> io::Result<()> {
        for (i, group) in groups.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, group)?;
        }
        Ok(())
    }

    fn show_results(&mut self, hits: &[SearchHit]) -> io::Result<()> {
        write!(self.output, "{}", render::hits(hits))
    }

    fn show_terms(&mut self, terms: &BTreeMap<String, Vec<String>>) -> io::Result<()> {
        write!(self.output, "{}", render::terms(terms))
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut ui = TerminalUi::new(Cursor::new("  2 \n"), Vec::new());
        assert_eq!(ui.ask(Question::Group).unwrap(), Some("2".to_string()));
        assert_eq!(ui.ask(Question::Group).unwrap(), None);

        let out = String::from_utf8(ui.into_output()).unwrap();
        assert_eq!(out.matches("Enter group number: ").count(), 2);
    }

    #[test]
    fn test_show_groups_numbers_from_one() {
        let mut ui = TerminalUi::new(Cursor::new(""), Vec::new());
        ui.show_groups(&["organisations".into(), "tickets".into()])
            .unwrap();
        let out = String::from_utf8(ui.into_output()).unwrap();
        assert_eq!(out, "  1) organisations\n  2) tickets\n");
    }
}
