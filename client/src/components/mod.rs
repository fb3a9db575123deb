//! Landing page sections and widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one region of the page and its own reactive state.
//! Shared signals (hero counters, the article modal) are passed in as props
//! by the page rather than looked up from context.

pub mod apps_section;
pub mod blog_modal;
pub mod blog_section;
pub mod chat_widget;
pub mod footer;
pub mod hero;
pub mod navbar;
