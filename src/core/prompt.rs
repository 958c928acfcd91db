//! # Prompts
//!
//! One question in the wizard, and the answer it produces.
//!
//! ```text
//! Prompt
//! ├── key: &str              // answer lookup key ("class", "level", ...)
//! ├── title / description    // shown above the options
//! ├── kind: PromptKind       // Select | MultiSelect | Confirm
//! └── validation: Validation // checked on submit
//! ```

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Exactly one option; the answer follows the highlight.
    Select { options: Vec<&'static str> },
    /// Any subset of the options, including none.
    MultiSelect { options: Vec<&'static str> },
    /// Yes/no with custom button labels.
    Confirm {
        affirmative: &'static str,
        negative: &'static str,
    },
}

impl PromptKind {
    pub fn options(&self) -> &[&'static str] {
        match self {
            PromptKind::Select { options } | PromptKind::MultiSelect { options } => options,
            PromptKind::Confirm { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    None,
    /// Confirmation must be answered affirmatively; carries the error message.
    MustAffirm(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub key: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub kind: PromptKind,
    pub validation: Validation,
}

impl Prompt {
    pub fn select(key: &'static str, options: Vec<&'static str>) -> Self {
        Self::with_kind(key, PromptKind::Select { options })
    }

    pub fn multi_select(key: &'static str, options: Vec<&'static str>) -> Self {
        Self::with_kind(key, PromptKind::MultiSelect { options })
    }

    pub fn confirm(key: &'static str, affirmative: &'static str, negative: &'static str) -> Self {
        Self::with_kind(
            key,
            PromptKind::Confirm {
                affirmative,
                negative,
            },
        )
    }

    fn with_kind(key: &'static str, kind: PromptKind) -> Self {
        Self {
            key,
            title: "",
            description: None,
            kind,
            validation: Validation::None,
        }
    }

    pub fn title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn validate(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// The answer recorded the first time the prompt gains focus.
    pub fn initial_answer(&self) -> Answer {
        match &self.kind {
            PromptKind::Select { options } => {
                Answer::Choice(options.first().map(|o| o.to_string()).unwrap_or_default())
            }
            PromptKind::MultiSelect { .. } => Answer::Choices(BTreeSet::new()),
            PromptKind::Confirm { .. } => Answer::Confirmed(false),
        }
    }

    pub fn check(&self, answer: &Answer) -> Result<(), ValidationError> {
        match (self.validation, answer) {
            (Validation::MustAffirm(message), Answer::Confirmed(false)) => {
                Err(ValidationError::new(message))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Choice(String),
    Choices(BTreeSet<String>),
    Confirmed(bool),
}

impl Answer {
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Answer::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&BTreeSet<String>> {
        match self {
            Answer::Choices(choices) => Some(choices),
            _ => None,
        }
    }

    pub fn as_confirmed(&self) -> Option<bool> {
        match self {
            Answer::Confirmed(value) => Some(*value),
            _ => None,
        }
    }
}

/// Field-level validation failure, shown inline rather than raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
