//! Session models

pub mod session;

// Re-export for convenience
pub use session::SessionRecord;
