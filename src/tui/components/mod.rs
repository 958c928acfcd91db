//! # TUI Components
//!
//! Every piece of the wizard's screen, plus the crash card.
//!
//! All components here are stateless: they receive their props as struct
//! fields, borrow the [`Styles`](crate::tui::styles::Styles) registry, and are
//! rebuilt every frame. Layout decisions (what goes where, what is dropped on
//! narrow terminals) belong to `ui.rs`, not to the components.
//!
//! - `BoundaryBar`: header and footer lines trailed by `/` fill
//! - `FormView`: the stacked prompts
//! - `StatusPanel`: current build and projected role
//! - `CompletionCard`: shown once the application is submitted
//! - `CrashCard`: the panic host's only view
//!
//! Each file carries its own tests, rendered against a `TestBackend`.

pub mod boundary;
pub mod completion_card;
pub mod crash_card;
pub mod form_view;
pub mod status_panel;

pub use boundary::BoundaryBar;
pub use completion_card::CompletionCard;
pub use crash_card::CrashCard;
pub use form_view::FormView;
pub use status_panel::StatusPanel;
