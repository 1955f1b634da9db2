//! Resume handling: document text extraction and skill extraction.

pub mod extract;
pub mod prompts;
pub mod skills;
