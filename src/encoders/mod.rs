pub mod algorithms;
pub mod decode;
pub mod encode;
pub mod magnitude;

pub use magnitude::Magnitude;
