//! The chat turn pipeline: classify, branch, analyze, aggregate, compose.

pub mod analyzer;
pub mod classifier;
pub mod composer;
pub mod handlers;
pub mod policy;
pub mod prompts;
pub mod session;
pub mod turn;
