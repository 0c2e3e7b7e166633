//! Repository layer over the scoped blob store.
//!
//! # Responsibility
//! - Own read-modify-write access to the persisted notes collection.
//! - Keep storage details out of presentation-facing code.
//!
//! # Invariants
//! - Every mutating operation re-reads the store first; the store may be
//!   shared with other execution contexts.
//! - Repository APIs return semantic results (`delete -> bool`) in addition
//!   to storage transport errors.

pub mod note_repo;
