//! Record store consulted by the member code generator.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

use crate::data::member::MemberRepository;

/// Read access to persisted member codes.
///
/// The generator only reads; inserting the owning record happens afterwards in the
/// member service, where the unique index on the code column has the final say.
#[async_trait]
pub trait MemberCodeStore: Send + Sync {
    /// Returns whether a member with exactly this code exists.
    async fn exists_by_code(&self, code: &str) -> Result<bool, DbErr>;

    /// Returns every persisted code starting with `prefix`, highest first.
    async fn find_codes_by_prefix(&self, prefix: &str) -> Result<Vec<String>, DbErr>;
}

#[async_trait]
impl MemberCodeStore for DatabaseConnection {
    async fn exists_by_code(&self, code: &str) -> Result<bool, DbErr> {
        MemberRepository::new(self).exists_by_code(code).await
    }

    async fn find_codes_by_prefix(&self, prefix: &str) -> Result<Vec<String>, DbErr> {
        MemberRepository::new(self).find_codes_by_prefix(prefix).await
    }
}

#[async_trait]
impl<T: MemberCodeStore + ?Sized> MemberCodeStore for Arc<T> {
    async fn exists_by_code(&self, code: &str) -> Result<bool, DbErr> {
        (**self).exists_by_code(code).await
    }

    async fn find_codes_by_prefix(&self, prefix: &str) -> Result<Vec<String>, DbErr> {
        (**self).find_codes_by_prefix(prefix).await
    }
}
