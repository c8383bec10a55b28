//! Core library exports for the Uptube service.
//!
//! This crate exposes the domain pipeline, forms, publisher boundary, routes
//! and service layers used by the Uptube publishing application.

#[cfg(feature = "pipeline")]
pub mod domain;
#[cfg(feature = "pipeline")]
pub mod dto;
#[cfg(feature = "pipeline")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "pipeline")]
pub mod publisher;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "pipeline")]
pub mod services;
