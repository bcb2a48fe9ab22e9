pub mod actors;
pub mod schemas;
pub mod types;

pub use actors::*;
pub use schemas::*;
pub use types::{ScalarType, TypeSignature};
