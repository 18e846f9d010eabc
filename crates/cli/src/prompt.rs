//! Operator prompts
//!
//! The menu never talks to the terminal directly; it asks a `Prompter`.
//! `DialoguerPrompter` drives the real terminal, `ScriptedPrompter` replays
//! canned answers.

use std::collections::VecDeque;

use anyhow::anyhow;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

pub trait Prompter {
    /// Free text; an empty answer is allowed
    fn input(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Free text that falls back to `default` when left blank
    fn input_with_default(&mut self, prompt: &str, default: &str) -> anyhow::Result<String>;

    /// Index of the chosen item
    fn select(&mut self, prompt: &str, items: &[String]) -> anyhow::Result<usize>;
}

/// Terminal prompts via dialoguer
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
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

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str) -> anyhow::Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn input_with_default(&mut self, prompt: &str, default: &str) -> anyhow::Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> anyhow::Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }
}

/// Replays a fixed list of answers, recording every prompt it was asked.
///
/// A select answer may be the item label or its zero-based index. Running
/// out of answers is an error, which ends an interactive session.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer for '{}'", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.next_answer(prompt)
    }

    fn input_with_default(&mut self, prompt: &str, default: &str) -> anyhow::Result<String> {
        let answer = self.next_answer(prompt)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> anyhow::Result<usize> {
        let answer = self.next_answer(prompt)?;
        items
            .iter()
            .position(|item| *item == answer)
            .or_else(|| answer.parse::<usize>().ok().filter(|i| *i < items.len()))
            .ok_or_else(|| anyhow!("'{}' is not one of {:?}", answer, items))
    }
}
