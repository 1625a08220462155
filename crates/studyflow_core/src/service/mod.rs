//! Panel use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the operations each panel exposes.
//! - Keep UI layers decoupled from list storage details.

pub mod note_service;
pub mod progress_service;
pub mod schedule_service;
pub mod task_service;
