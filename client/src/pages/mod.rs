//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has one page; it creates the signals shared between sections
//! and delegates rendering to `components`.

pub mod home;
