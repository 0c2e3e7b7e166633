//! Presentation-facing use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into submit/list/delete flows.
//! - Keep rendering layers decoupled from storage details.

pub mod note_service;
