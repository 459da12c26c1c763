//! Domain logic shared by the trio services.
//!
//! Nothing in this crate touches the network or the database, so every
//! module can be unit-tested in isolation and reused by the repository and
//! HTTP layers alike.

pub mod error;
pub mod genres;
pub mod pagination;
pub mod permissions;
pub mod quiz;
pub mod recipe;
pub mod search;
pub mod service;
pub mod shows;
pub mod types;
