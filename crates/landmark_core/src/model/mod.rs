//! Landmark read model.
//!
//! # Responsibility
//! - Define the record shape produced by landmark queries.
//!
//! # Invariants
//! - Every landmark is identified by its `landmarks.id` primary key.
//! - Availability rows are never materialized as model objects.

pub mod landmark;
