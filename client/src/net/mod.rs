//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the same-origin JSON endpoints; the wire records themselves
//! come from the shared `records` crate.

pub mod api;
