//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented landmark lookup contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories never write; they only read `landmarks` and its
//!   availability join.
//! - Repository APIs translate connectivity failures only.

pub mod landmark_repo;
