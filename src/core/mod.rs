// Core domain layer
pub mod emitter;
pub mod graph;
pub mod interfaces;
pub mod models;
pub mod resolver;
pub mod services;

#[cfg(test)]
pub(crate) mod test_utils;

pub use emitter::*;
pub use graph::*;
pub use interfaces::*;
pub use models::*;
pub use resolver::*;
pub use services::*;
