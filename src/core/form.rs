//! # Form Wizard
//!
//! An ordered set of prompts walked front to back.
//!
//! ```text
//!  Active(0) ──submit──▶ Active(1) ──submit──▶ ... ──submit(valid)──▶ Completed
//!      ▲                     │
//!      └──────── prev ───────┘
//! ```
//!
//! The form owns the answers. A prompt's answer is recorded the moment it
//! first gains focus, so every visited key always has exactly one answer.
//! Validation failures are stored on the field and rendered; they never
//! escape as errors.

use std::collections::BTreeMap;

use log::debug;

use crate::core::keymap::{FormKeyMap, Key, KeyBinding};
use crate::core::prompt::{Answer, Prompt, PromptKind, ValidationError};

/// Form-internal events, produced from key presses by [`Form::action_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Up,
    Down,
    /// Multi-select: flip the highlighted option. Confirm: flip the value.
    Toggle,
    /// Confirm only: set the value directly.
    Choose(bool),
    /// Validate the active prompt and advance (or complete on the last one).
    Submit,
    /// Move focus back one prompt.
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone)]
struct Field {
    prompt: Prompt,
    highlight: usize,
    error: Option<ValidationError>,
}

impl Field {
    fn highlighted_option(&self) -> Option<&'static str> {
        self.prompt.kind.options().get(self.highlight).copied()
    }

    fn move_highlight(&mut self, down: bool) {
        let len = self.prompt.kind.options().len();
        if len == 0 {
            return;
        }
        self.highlight = if down {
            (self.highlight + 1).min(len - 1)
        } else {
            self.highlight.saturating_sub(1)
        };
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    focus: usize,
    answers: BTreeMap<&'static str, Answer>,
    status: FormStatus,
    keys: FormKeyMap,
}

impl Form {
    pub fn new(prompts: Vec<Prompt>) -> Self {
        let fields: Vec<Field> = prompts
            .into_iter()
            .map(|prompt| Field {
                prompt,
                highlight: 0,
                error: None,
            })
            .collect();
        let status = if fields.is_empty() {
            FormStatus::Completed
        } else {
            FormStatus::Active
        };
        let mut form = Self {
            fields,
            focus: 0,
            answers: BTreeMap::new(),
            status,
            keys: FormKeyMap::default(),
        };
        form.visit(0);
        form
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == FormStatus::Completed
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn prompts(&self) -> impl Iterator<Item = &Prompt> {
        self.fields.iter().map(|field| &field.prompt)
    }

    pub fn active_prompt(&self) -> Option<&Prompt> {
        self.fields.get(self.focus).map(|field| &field.prompt)
    }

    /// Highlighted option index of the prompt at `index`.
    pub fn highlight(&self, index: usize) -> usize {
        self.fields.get(index).map_or(0, |field| field.highlight)
    }

    pub fn answer(&self, key: &str) -> Option<&Answer> {
        self.answers.get(key)
    }

    /// The single-choice answer for `key`, or `""` when unanswered.
    pub fn get_string(&self, key: &str) -> &str {
        self.answer(key).and_then(Answer::as_choice).unwrap_or("")
    }

    /// Validation error of the prompt at `index`, if its last submit failed.
    pub fn error(&self, index: usize) -> Option<&ValidationError> {
        self.fields.get(index).and_then(|field| field.error.as_ref())
    }

    pub fn errors(&self) -> Vec<&ValidationError> {
        self.fields
            .iter()
            .filter_map(|field| field.error.as_ref())
            .collect()
    }

    /// Translate a key press into a form action for the active prompt.
    pub fn action_for(&self, key: &Key) -> Option<FormAction> {
        let prompt = self.active_prompt()?;
        let keys = &self.keys;

        if keys.submit.matches(key) {
            return Some(FormAction::Submit);
        }
        if keys.prev.matches(key) {
            return Some(FormAction::Prev);
        }

        match prompt.kind {
            PromptKind::Select { .. } | PromptKind::MultiSelect { .. } if keys.up.matches(key) => {
                Some(FormAction::Up)
            }
            PromptKind::Select { .. } | PromptKind::MultiSelect { .. }
                if keys.down.matches(key) =>
            {
                Some(FormAction::Down)
            }
            PromptKind::MultiSelect { .. } if keys.toggle_option.matches(key) => {
                Some(FormAction::Toggle)
            }
            PromptKind::Confirm { .. } if keys.toggle_confirm.matches(key) => {
                Some(FormAction::Toggle)
            }
            PromptKind::Confirm { .. } if keys.accept.matches(key) => Some(FormAction::Choose(true)),
            PromptKind::Confirm { .. } if keys.reject.matches(key) => {
                Some(FormAction::Choose(false))
            }
            _ => None,
        }
    }

    /// Key help for the active prompt; empty once completed.
    pub fn help(&self) -> Vec<KeyBinding> {
        match self.active_prompt() {
            Some(prompt) if !self.is_completed() => {
                self.keys.bindings_for(&prompt.kind, self.focus > 0)
            }
            _ => Vec::new(),
        }
    }

    /// Apply a form action. Returns `false` when the form no longer accepts input.
    pub fn apply(&mut self, action: FormAction) -> bool {
        if self.is_completed() {
            return false;
        }
        let Some(field) = self.fields.get_mut(self.focus) else {
            return false;
        };
        field.error = None;
        let key = field.prompt.key;
        let kind = field.prompt.kind.clone();

        match (action, &kind) {
            (FormAction::Up | FormAction::Down, PromptKind::Select { .. }) => {
                field.move_highlight(action == FormAction::Down);
                if let Some(option) = field.highlighted_option() {
                    self.answers.insert(key, Answer::Choice(option.to_string()));
                }
            }
            (FormAction::Up | FormAction::Down, PromptKind::MultiSelect { .. }) => {
                field.move_highlight(action == FormAction::Down);
            }
            (FormAction::Toggle, PromptKind::MultiSelect { .. }) => {
                if let Some(option) = field.highlighted_option()
                    && let Some(Answer::Choices(choices)) = self.answers.get_mut(key)
                    && !choices.remove(option)
                {
                    choices.insert(option.to_string());
                }
            }
            (FormAction::Toggle, PromptKind::Confirm { .. }) => {
                if let Some(Answer::Confirmed(value)) = self.answers.get_mut(key) {
                    *value = !*value;
                }
            }
            (FormAction::Choose(choice), PromptKind::Confirm { .. }) => {
                self.answers.insert(key, Answer::Confirmed(choice));
            }
            (FormAction::Submit, _) => self.submit(),
            (FormAction::Prev, _) => {
                self.focus = self.focus.saturating_sub(1);
            }
            _ => {}
        }
        true
    }

    fn submit(&mut self) {
        let field = &mut self.fields[self.focus];
        let answer = self
            .answers
            .get(field.prompt.key)
            .cloned()
            .unwrap_or_else(|| field.prompt.initial_answer());

        if let Err(err) = field.prompt.check(&answer) {
            debug!("Validation failed for '{}': {}", field.prompt.key, err);
            field.error = Some(err);
            return;
        }

        if self.focus + 1 >= self.fields.len() {
            debug!("Form completed");
            self.status = FormStatus::Completed;
        } else {
            self.focus += 1;
            self.visit(self.focus);
        }
    }

    fn visit(&mut self, index: usize) {
        if let Some(field) = self.fields.get(index) {
            self.answers
                .entry(field.prompt.key)
                .or_insert_with(|| field.prompt.initial_answer());
        }
    }
}
