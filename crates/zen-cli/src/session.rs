//! Interactive search session.
//!
//! Welcome menu -> group -> term -> value -> results, repeated until the
//! user quits. Quitting and giving up are returned as values; the session
//! never terminates the process.

use std::io;
use std::sync::Arc;

use tracing::{debug, info, warn};

use zen_index::Catalog;

use crate::render::SearchHit;
use crate::ui::{Question, Ui};

/// What the caller should do after one menu round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Result of asking one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    Answer(T),
    /// The user typed `q`/`quit`, or input ended.
    Cancelled,
    /// Attempts exhausted.
    GaveUp,
}

fn is_quit(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "q" | "quit")
}

/// A menu-driven session over a loaded catalog.
pub struct Session<U> {
    catalog: Arc<Catalog>,
    ui: U,
    max_tries: u32,
}

impl<U: Ui> Session<U> {
    pub fn new(catalog: Arc<Catalog>, ui: U, max_tries: u32) -> Self {
        Self {
            catalog,
            ui,
            max_tries,
        }
    }

    /// Hand back the UI once the session is done.
    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Run menu rounds until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Interactive session started");
        while self.round()? == Outcome::Continue {}
        info!("Interactive session ended");
        Ok(())
    }

    /// One pass through the welcome menu.
    pub fn round(&mut self) -> io::Result<Outcome> {
        let Some(option) = self.ui.ask(Question::Welcome)? else {
            return Ok(Outcome::Quit);
        };
        match option.as_str() {
            "1" => self.search(),
            "2" => {
                self.ui.show_terms(&self.catalog.all_terms())?;
                Ok(Outcome::Continue)
            }
            other if is_quit(other) => Ok(Outcome::Quit),
            _ => {
                self.ui
                    .show_error("Valid options are '1' or '2', please try again.")?;
                Ok(Outcome::Continue)
            }
        }
    }

    fn search(&mut self) -> io::Result<Outcome> {
        let groups = self.catalog.groups();
        self.ui.show_groups(&groups)?;

        let group = match self.ask_group(&groups)? {
            Prompt::Answer(g) => g,
            Prompt::Cancelled => return Ok(Outcome::Quit),
            Prompt::GaveUp => return Ok(Outcome::Continue),
        };
        let term = match self.ask_term(&group)? {
            Prompt::Answer(t) => t,
            Prompt::Cancelled => return Ok(Outcome::Quit),
            Prompt::GaveUp => return Ok(Outcome::Continue),
        };
        let Some(value) = self.ui.ask(Question::Value)? else {
            return Ok(Outcome::Quit);
        };

        match self.collect_hits(&group, &term, &value) {
            Ok(hits) => self.ui.show_results(&hits)?,
            Err(e) => {
                warn!(error = %e, "Search failed");
                self.ui.show_error(&e.to_string())?;
            }
        }
        Ok(Outcome::Continue)
    }

    fn collect_hits(
        &self,
        group: &str,
        term: &str,
        value: &str,
    ) -> Result<Vec<SearchHit>, zen_index::IndexError> {
        let matches = self.catalog.find_matches(group, term, value)?;
        debug!(group, term, matches = matches.len(), "Expanding related records");
        matches
            .into_iter()
            .map(|record| {
                let related = self.catalog.find_related(group, &record)?;
                Ok(SearchHit { record, related })
            })
            .collect()
    }

    /// Ask for a group by its 1-based menu number.
    pub fn ask_group(&mut self, groups: &[String]) -> io::Result<Prompt<String>> {
        for _ in 0..self.max_tries {
            let Some(answer) = self.ui.ask(Question::Group)? else {
                return Ok(Prompt::Cancelled);
            };
            if is_quit(&answer) {
                return Ok(Prompt::Cancelled);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=groups.len()).contains(&n) => {
                    return Ok(Prompt::Answer(groups[n - 1].clone()));
                }
                _ => self.ui.show_error(&format!(
                    "Invalid selection, please choose between 1 and {}, or 'quit' at any time.",
                    groups.len()
                ))?,
            }
        }
        self.ui.show_error("Too many attempts, sorry.")?;
        Ok(Prompt::GaveUp)
    }

    /// Ask for a field name that is a term of `group`.
    pub fn ask_term(&mut self, group: &str) -> io::Result<Prompt<String>> {
        let terms = match self.catalog.terms(group) {
            Ok(t) => t,
            Err(e) => {
                self.ui.show_error(&e.to_string())?;
                return Ok(Prompt::GaveUp);
            }
        };
        for _ in 0..self.max_tries {
            let Some(answer) = self.ui.ask(Question::Term)? else {
                return Ok(Prompt::Cancelled);
            };
            if is_quit(&answer) {
                return Ok(Prompt::Cancelled);
            }
            if terms.contains(&answer) {
                return Ok(Prompt::Answer(answer));
            }
            self.ui.show_error(
                "Invalid selection, please choose a valid search term, or 'quit' at any time.",
            )?;
        }
        self.ui.show_error("Too many attempts, sorry.")?;
        Ok(Prompt::GaveUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::TerminalUi;
    use std::io::Cursor;
    use zen_types::{Organisation, Ticket};

    fn catalog() -> Arc<Catalog> {
        let orgs = vec![Organisation {
            id: 1,
            name: "Acme".into(),
            ..Organisation::default()
        }];
        let tickets = vec![Ticket {
            id: "t-1".into(),
            subject: "help".into(),
            organization_id: Some(1),
            ..Ticket::default()
        }];
        Arc::new(
            Catalog::builder()
                .group("organisations", &orgs)
                .group("tickets", &tickets)
                .build(),
        )
    }

    fn run_with(input: &str) -> String {
        let ui = TerminalUi::new(Cursor::new(input.to_string()), Vec::new());
        let mut session = Session::new(catalog(), ui, 3);
        session.run().unwrap();
        String::from_utf8(session.into_ui().into_output()).unwrap()
    }

    #[test]
    fn test_search_shows_match_and_related() {
        let out = run_with("1\n2\nsubject\nHELP\nquit\n");
        assert!(out.contains("=== Match 1 ==="));
        assert!(out.contains("t-1"));
        assert!(out.contains("related organisations (via _id)"));
        assert!(out.contains("Acme"));
    }

    #[test]
    fn test_show_terms() {
        let out = run_with("2\nq\n");
        assert!(out.contains("Search organisations with:"));
        assert!(out.contains("  domain_names"));
    }

    #[test]
    fn test_invalid_menu_option() {
        let out = run_with("7\nquit\n");
        assert!(out.contains("Valid options are '1' or '2'"));
    }

    #[test]
    fn test_group_attempts_exhausted_returns_to_menu() {
        let out = run_with("1\n0\nx\n9\n2\nquit\n");
        assert_eq!(out.matches("please choose between 1 and 2").count(), 3);
        assert!(out.contains("Too many attempts, sorry."));
        // back at the menu, option 2 lists terms
        assert!(out.contains("Search tickets with:"));
    }

    #[test]
    fn test_quit_during_term_question() {
        let ui = TerminalUi::new(Cursor::new("1\n1\nquit\n2\n"), Vec::new());
        let mut session = Session::new(catalog(), ui, 3);
        assert_eq!(session.round().unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_ask_term_rejects_unknown() {
        let ui = TerminalUi::new(Cursor::new("bogus\nname\n"), Vec::new());
        let mut session = Session::new(catalog(), ui, 3);
        assert_eq!(
            session.ask_term("organisations").unwrap(),
            Prompt::Answer("name".to_string())
        );
    }

    #[test]
    fn test_end_of_input_quits() {
        let out = run_with("");
        assert!(out.contains("Select search options"));
    }

    #[test]
    fn test_no_results() {
        let out = run_with("1\n1\nname\nInitech\nq\n");
        assert!(out.contains("No results found."));
    }
}
