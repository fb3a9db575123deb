//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, document attributes,
//! scrolling) from component logic so the components stay declarative and
//! the pure parts stay testable.

pub mod date;
pub mod dom;
pub mod scroll;
pub mod theme;
