//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome while reading shared auth state from the
//! Leptos context provider.

pub mod navbar;
