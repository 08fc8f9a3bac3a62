//! Core domain types and utilities for the pipewright workspace.
//!
//! This crate provides the foundational types shared by the agent and
//! conversation crates: the `Result` alias and strongly-typed entity IDs.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ConversationSessionId, MessageId};
