//! Utility functions for rule implementations.

pub mod lines;
pub mod paths;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use lines::{classify_lines, ClassifiedLine, LineKind};
#[doc(inline)]
pub use paths::{CanonicalPath, PathResolver};
