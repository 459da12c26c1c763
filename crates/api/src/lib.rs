//! HTTP layer for the trio services: Fyyur (venues, artists, shows), the
//! trivia API and the coffee shop.
//!
//! Exposes the building blocks (config, state, error handling, routes, auth)
//! so the service binaries and the integration tests share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;
