//! SeaORM entity definitions for the gym backend.

pub mod prelude;

pub mod member;
