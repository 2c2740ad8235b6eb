//! Session handling for the Cookbook client
//!
//! Decodes the token issued at sign-in, persists the resulting session record
//! in client storage, and validates the authentication and recipe forms.

pub mod jwt;
pub mod models;
pub mod session;
pub mod storage;
pub mod validation;

pub use models::SessionRecord;
pub use session::SessionManager;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
