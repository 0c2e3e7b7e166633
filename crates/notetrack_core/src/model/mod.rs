//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the canonical note record and the persisted aggregate shape.
//! - Own the fixed first-run seed dataset.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` that is never reused.
//! - `created_at` is set once at creation and never mutated.

pub mod note;
