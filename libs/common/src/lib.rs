//! Common library for the Cookbook client
//!
//! This crate provides functionality shared by the client crates: the error
//! type every operation reports through, configuration loading, and the seam
//! the HTTP client uses to obtain the bearer token of the current session.
//!
//! ```rust,no_run
//! use common::ClientConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     println!("Recipe service: {}", config.api_base_url);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod token;

pub use self::config::ClientConfig;
pub use self::error::{ClientError, ClientResult};
pub use self::token::TokenSource;
