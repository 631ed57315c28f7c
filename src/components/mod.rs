//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! For pages rendered with Leptos. Plain server-rendered pages use the
//! auto-started controller in `lib.rs` instead.

pub mod theme_toggle;
