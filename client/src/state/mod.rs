//! Client-side state for the landing page widgets.
//!
//! DESIGN
//! ======
//! Each module holds the plain data and transitions of one widget. Components
//! wrap these in `RwSignal`s; keeping the transitions free of Leptos and the
//! DOM lets them run under native unit tests.

pub mod apps;
pub mod blog;
pub mod chat;
pub mod counter;
pub mod load;
pub mod theme;
