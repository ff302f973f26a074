//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, form state, auth calls)
//! and keeps input shaping in small pure helpers.

pub mod dashboard;
pub mod login;
pub mod register;
pub mod welcome;
