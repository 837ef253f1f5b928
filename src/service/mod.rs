//! Service layer for business logic and orchestration.
//!
//! Services sit above the data (repository) layer and work with domain models:
//!
//! - **Member** (`member`) - member lifecycle, including code assignment on creation
//! - **Member code** (`member_code`) - generation of unique member codes

pub mod member;
pub mod member_code;

#[cfg(test)]
mod test;
