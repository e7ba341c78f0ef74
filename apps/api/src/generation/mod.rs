//! Resume generation — prompt assembly, the model call, the offline
//! fallback, and output cleaning.

pub mod cleaner;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
