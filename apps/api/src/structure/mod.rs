//! Resume structuring — raw generator text to a renderable document model.

pub mod blocks;
pub mod engine;
pub mod handlers;

pub use blocks::{Block, Section};
pub use engine::structure;
