//! # lanes-core
//!
//! Core types and pure task-list logic for lanes.
//!
//! This crate provides the foundational types shared across all lanes crates:
//! - Entity structs for tasks, boards, and the default column set
//! - The order normalizer that keeps per-column ordering dense
//! - Pure task mutations (add, edit, delete, drag-and-drop move)
//! - Seed data for the default board
//! - Form-boundary helpers for labels and due dates
//! - Board snapshots for summary views
//! - Clock and id-generator collaborators
//! - Cross-cutting error types

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod input;
pub mod mutation;
pub mod order;
pub mod seed;
pub mod snapshot;
