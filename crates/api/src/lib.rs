//! Game master web server library.
//!
//! Exposes the building blocks (config, state, error handling, auth,
//! extractors, pages, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
