//! Gym management backend: member records and member code generation.
//!
//! # Architecture
//!
//! - **Service Layer** (`service/`) - Business logic, including the member code
//!   generator and the member creation path that consumes it
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Logging, database connection, migrations and
//!   generator initialization
//!
//! # Example
//!
//! ```rust,ignore
//! use gym_backend::{config::Config, startup, service::member::MemberService};
//!
//! let config = Config::load()?;
//! startup::init_tracing();
//! let db = startup::connect_to_database(&config).await?;
//! let generator = startup::init_member_code_generator(&db, &config).await;
//!
//! let member = MemberService::new(&db, &generator).create(param).await?;
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
