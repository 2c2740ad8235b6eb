//! Cookbook client
//!
//! Pages, routing and view state for the recipe-sharing service. The HTTP
//! client lives in the `api` crate and the session record in `auth`; this
//! crate wires them into pages behind a session gate.

pub mod cli;
pub mod components;
pub mod favorites;
pub mod notifications;
pub mod pages;
pub mod recipe_list;
pub mod routes;
pub mod state;

pub use notifications::{Notification, NotificationCenter, NotificationId, NotificationKind};
pub use routes::{Location, Navigation, Route};
pub use state::AppContext;
