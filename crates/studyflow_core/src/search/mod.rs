//! Client-side list filters.
//!
//! # Responsibility
//! - Filter task lists by completion state.
//! - Match notes by case-insensitive substring across text fields and tags.
//!
//! # Invariants
//! - Filters never reorder the list they are applied to.

pub mod filter;
