//! Error types for the gym backend.
//!
//! `AppError` is the top-level error returned by services. Domain-specific errors
//! live in their own modules and convert into it through `#[from]`.

pub mod config;
pub mod member_code;

use thiserror::Error;

use crate::error::{config::ConfigError, member_code::MemberCodeError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion so services can propagate
/// with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Member code could not be produced for a new member.
    ///
    /// Fatal for the creation request; no member is stored.
    #[error(transparent)]
    MemberCodeErr(#[from] MemberCodeError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}
