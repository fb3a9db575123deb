//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own content loading and LLM calls so route handlers can
//! stay focused on protocol translation and status mapping.

pub mod apps;
pub mod assistant;
pub mod blog;
