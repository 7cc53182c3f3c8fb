//! Terminal prompts.
//!
//! Menus talk to the user through the [`Prompter`] trait so they can be
//! driven by a script in tests. [`DialoguerPrompter`] is the interactive
//! implementation.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

/// Source of user answers.
pub trait Prompter {
    /// Asks for a line of text. A blank answer yields `default` when one is
    /// given, otherwise an empty string. Answers are trimmed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be read.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String>;

    /// Asks for a secret without echoing it. A blank answer yields `default`
    /// when one is given.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be read.
    fn password(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String>;

    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be read.
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool>;

    /// Asks the user to pick one of `items`, returning its index.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be read.
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> io::Result<usize>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    /// Creates a prompter with the colorful theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for DialoguerPrompter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialoguerPrompter").finish_non_exhaustive()
    }
}

fn prompt_error(error: dialoguer::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error)
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default.filter(|d| !d.is_empty()) {
            input = input.default(default.to_string());
        }
        let answer = input.interact_text().map_err(prompt_error)?;
        Ok(answer.trim().to_string())
    }

    fn password(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String> {
        let answer = Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(default.is_some())
            .interact()
            .map_err(prompt_error)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> io::Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;
    use std::io;

    use super::Prompter;

    /// One scripted answer.
    #[derive(Debug, Clone)]
    pub enum Answer {
        Text(&'static str),
        Confirm(bool),
        Select(usize),
    }

    /// Replays answers in order. Running out of answers is an
    /// `UnexpectedEof` error, which ends the front-end's loop.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        pub prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                prompts: Vec::new(),
            }
        }

        fn next(&mut self, prompt: &str) -> io::Result<Answer> {
            self.prompts.push(prompt.to_string());
            self.answers.pop_front().ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, format!("no answer for '{prompt}'"))
            })
        }

        fn text(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String> {
            match self.next(prompt)? {
                Answer::Text("") => Ok(default.unwrap_or_default().to_string()),
                Answer::Text(text) => Ok(text.to_string()),
                other => panic!("expected text for '{prompt}', script has {other:?}"),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String> {
            self.text(prompt, default)
        }

        fn password(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String> {
            self.text(prompt, default)
        }

        fn confirm(&mut self, prompt: &str, _default: bool) -> io::Result<bool> {
            match self.next(prompt)? {
                Answer::Confirm(yes) => Ok(yes),
                other => panic!("expected confirm for '{prompt}', script has {other:?}"),
            }
        }

        fn select(&mut self, prompt: &str, items: &[&str], _default: usize) -> io::Result<usize> {
            match self.next(prompt)? {
                Answer::Select(index) if index < items.len() => Ok(index),
                other => panic!("expected selection for '{prompt}', script has {other:?}"),
            }
        }
    }
}
