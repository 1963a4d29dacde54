//! Deterministic decision making for AI-controlled actors.
//!
//! Decisions are expressed as a small behavior tree over a [`PolicyContext`]
//! blackboard; [`AiPolicy`] assembles the tree and extracts the chosen action.
mod context;
pub mod nodes;
mod policy;
pub mod tree;

pub use context::PolicyContext;
pub use policy::{AiPolicy, PolicyState};
pub use tree::{Behavior, Node, Status};
