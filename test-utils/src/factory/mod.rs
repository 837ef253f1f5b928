//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::create_member(&db).await?;
//!
//! let member = factory::member::MemberFactory::new(&db)
//!     .member_code("M202404070001")
//!     .first_name("Asha")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod member;

// Re-export commonly used factory functions for concise usage
pub use member::{create_member, create_member_with_code};
