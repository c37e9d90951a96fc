//! Live transport implementations

pub mod together;

// Re-export for convenience
pub use together::TogetherTransport;
