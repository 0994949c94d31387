//! Explicit application state.
//!
//! Filters, map viewport, UI chrome, and user preferences live in one owned
//! value the shell passes down, not in a global mutable store. Every mutation
//! is a `&mut self` method, so the engine stays deterministic and testable
//! with no UI attached.

mod app_state;
mod view;

pub use app_state::AppState;
pub use view::{MapViewport, PreferencesPatch, Theme, UiState, UserPreferences};
