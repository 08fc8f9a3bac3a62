//! Conversation primitives for the pipewright agent.
//!
//! This crate provides:
//!
//! - **Message**: a single turn (role, content, timestamp)
//! - **Session**: the ordered, in-memory turn history owned by one agent

pub mod message;
pub mod session;

pub use message::{Message, MessageRole};
pub use session::Session;
