pub mod errors;
pub mod fixed;
pub mod math;

// Re-export error types for public API
pub use errors::{Opb58Error, Result};
