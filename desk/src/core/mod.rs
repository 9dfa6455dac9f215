//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`), the
//!   uniform shape every failed remote call is normalized into.
//! - **[`service`]**: The [`service::ApiService`] trait implemented by the
//!   concrete HTTP client and by mocks in tests.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
