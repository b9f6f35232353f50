//! Interactive prompt abstraction.
//!
//! The verb handlers never render UI themselves; they consume the results
//! of four prompt primitives through the [`Prompter`] trait. The real
//! implementation is backed by `dialoguer`; tests substitute a scripted
//! double.
//!
//! Every operation returns `Ok(None)` when the user cancels the prompt.
//! Cancellation is a no-op for that step, not an error.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use history_book_core::error::{Error, Result};

pub trait Prompter {
    /// Checklist over `items`; returns the chosen indices, or `None` on
    /// cancel.
    fn checklist(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>>;

    /// Single-choice menu over `items`; returns the chosen index, or `None`
    /// on cancel.
    fn menu(&self, prompt: &str, items: &[String]) -> Result<Option<usize>>;

    /// Text input pre-filled with `default`; returns the edited text, or
    /// `None` on cancel.
    fn input(&self, prompt: &str, default: &str) -> Result<Option<String>>;

    /// Yes/no question; returns the answer, or `None` on cancel.
    fn confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;
}

/// Terminal prompter backed by `dialoguer` with its colorful theme.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(e: &dialoguer::Error) -> Error {
    Error::Prompt(e.to_string())
}

impl Prompter for DialoguerPrompter {
    fn checklist(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact_opt()
            .map_err(|e| prompt_error(&e))
    }

    fn menu(&self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| prompt_error(&e))
    }

    fn input(&self, prompt: &str, default: &str) -> Result<Option<String>> {
        // dialoguer's Input has no cancel path; accepting the initial text
        // unchanged is the "keep the current value" gesture.
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(default)
            .allow_empty(true)
            .interact_text()
            .map(Some)
            .map_err(|e| prompt_error(&e))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| prompt_error(&e))
    }
}

/// A prompter that replays scripted answers, for tests.
#[derive(Default)]
pub struct ScriptedPrompter {
    checklists: std::cell::RefCell<std::collections::VecDeque<Option<Vec<usize>>>>,
    menus: std::cell::RefCell<std::collections::VecDeque<Option<usize>>>,
    inputs: std::cell::RefCell<std::collections::VecDeque<Option<String>>>,
    confirms: std::cell::RefCell<std::collections::VecDeque<Option<bool>>>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_checklist(&self, answer: Option<Vec<usize>>) {
        self.checklists.borrow_mut().push_back(answer);
    }

    pub fn push_menu(&self, answer: Option<usize>) {
        self.menus.borrow_mut().push_back(answer);
    }

    pub fn push_input(&self, answer: Option<&str>) {
        self.inputs
            .borrow_mut()
            .push_back(answer.map(str::to_string));
    }

    pub fn push_confirm(&self, answer: Option<bool>) {
        self.confirms.borrow_mut().push_back(answer);
    }
}

impl Prompter for ScriptedPrompter {
    fn checklist(&self, _prompt: &str, _items: &[String]) -> Result<Option<Vec<usize>>> {
        self.checklists
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Prompt("no scripted checklist answer".to_string()))
    }

    fn menu(&self, _prompt: &str, _items: &[String]) -> Result<Option<usize>> {
        self.menus
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Prompt("no scripted menu answer".to_string()))
    }

    fn input(&self, _prompt: &str, default: &str) -> Result<Option<String>> {
        match self.inputs.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            // No scripted answer means "accept the default unchanged".
            None => Ok(Some(default.to_string())),
        }
    }

    fn confirm(&self, _prompt: &str, _default: bool) -> Result<Option<bool>> {
        self.confirms
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Prompt("no scripted confirm answer".to_string()))
    }
}
