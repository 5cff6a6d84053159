//! Merch Lense host server
//!
//! Serves the built Leptos frontend and forwards its `/api/*` calls to the
//! analytics backend. No business logic lives here.

pub mod config;
pub mod logging;
pub mod proxy;
pub mod server;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
