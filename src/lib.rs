//! cymig: migrate a legacy `cypress.json` project to the `cypress.config` layout.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api;
pub use domain::AppError;
