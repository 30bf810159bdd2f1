// Processors module
pub mod js_processor;
pub mod rewrite;

pub use js_processor::*;
