//! Core use-case services.
//!
//! # Responsibility
//! - Expose repository lookups as storage-agnostic entry points.
//! - Keep CLI callers decoupled from storage details.

pub mod landmark_service;
