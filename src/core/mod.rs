//! # Core Wizard Logic
//!
//! The form wizard's state machine. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (wizard state)   │
//!                    │  • Msg (events)         │
//!                    │  • update() (reducer)   │
//!                    │  • resolve() (roles)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all wizard state in one place
//! - [`action`]: The `Msg` enum and `update()`
//! - [`form`]: Prompt sequencing, answers and validation
//! - [`role`]: The (class, level) → role table

pub mod action;
pub mod config;
pub mod form;
pub mod keymap;
pub mod prompt;
pub mod questionnaire;
pub mod role;
pub mod state;
