//! Member service for business logic.
//!
//! This module provides the `MemberService`, which owns the member creation path:
//! a code is requested from the member code generator and the member is inserted
//! with it. The generator's existence check narrows but does not close the window
//! in which another process can claim the same code, so an insert rejected by the
//! unique index is retried with a fresh code.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    data::member::MemberRepository,
    error::{member_code::MemberCodeError, AppError},
    model::member::{
        CreateMemberParam, Member, MemberProfile, MemberStatus, PaginatedMembers,
        UpdateMemberParam,
    },
    service::member_code::{clock::Clock, store::MemberCodeStore, MemberCodeGenerator},
};

/// Service providing business logic for member management.
pub struct MemberService<'a, S, C> {
    db: &'a DatabaseConnection,
    generator: &'a MemberCodeGenerator<S, C>,
}

impl<'a, S, C> MemberService<'a, S, C>
where
    S: MemberCodeStore,
    C: Clock,
{
    /// Creates a new MemberService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `generator` - Shared member code generator
    ///
    /// # Returns
    /// - `MemberService` - New service instance
    pub fn new(db: &'a DatabaseConnection, generator: &'a MemberCodeGenerator<S, C>) -> Self {
        Self { db, generator }
    }

    /// Creates a new active member with a freshly generated member code.
    ///
    /// The member joins on the day encoded in its code.
    ///
    /// Retries with a new code, up to the generator's retry budget, when the insert
    /// hits the unique index on the member code.
    ///
    /// # Arguments
    /// - `param` - Member details
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(AppError::BadRequest)` - A required field is blank
    /// - `Err(AppError::MemberCodeErr)` - No usable member code could be produced
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, AppError> {
        validate_profile(&param.profile)?;

        let repo = MemberRepository::new(self.db);
        let attempts = self.generator.max_retries();

        for _ in 0..attempts {
            let (member_code, join_date) = self.generator.generate_dated().await?;

            match repo
                .create(param.clone(), member_code.clone(), join_date)
                .await
            {
                Ok(member) => {
                    tracing::info!(
                        "Created member {} with ID {} and code {}",
                        member.full_name(),
                        member.id,
                        member.member_code
                    );
                    return Ok(member);
                }
                Err(e) if is_unique_violation(&e) => {
                    tracing::warn!(
                        "Member code {} was claimed before insert, retrying: {}",
                        member_code,
                        e
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(MemberCodeError::CodeGenerationExhausted { attempts }.into())
    }

    /// Retrieves a member by ID.
    ///
    /// # Returns
    /// - `Ok(Member)` - Member found
    /// - `Err(AppError::NotFound)` - No member with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member not found with ID: {}", id)))
    }

    /// Retrieves a member by member code.
    ///
    /// # Returns
    /// - `Ok(Member)` - Member found
    /// - `Err(AppError::NotFound)` - No member holds that code
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_code(&self, member_code: &str) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_code(member_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Member not found with code: {}", member_code))
            })
    }

    /// Searches members by name, email or phone.
    ///
    /// # Arguments
    /// - `term` - Search text; empty matches every member
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Members per page, must be positive
    ///
    /// # Returns
    /// - `Ok(PaginatedMembers)` - Requested page of matching members
    /// - `Err(AppError::BadRequest)` - `per_page` is zero
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn search(
        &self,
        term: &str,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMembers, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest(
                "Page size must be at least 1".to_string(),
            ));
        }

        let (members, total_pages) = MemberRepository::new(self.db)
            .search(term, page, per_page)
            .await?;

        Ok(PaginatedMembers {
            members,
            total_pages,
            page,
            per_page,
        })
    }

    /// Updates a member's profile and optionally their status.
    ///
    /// The member code never changes.
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(AppError::BadRequest)` - A required field is blank
    /// - `Err(AppError::NotFound)` - No member with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateMemberParam) -> Result<Member, AppError> {
        validate_profile(&param.profile)?;

        let member = MemberRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member not found with ID: {}", id)))?;

        tracing::info!("Member updated with ID {}", member.id);
        Ok(member)
    }

    /// Deletes a member.
    ///
    /// The member's code is not handed out again: the counter only moves forward.
    ///
    /// # Returns
    /// - `Ok(())` - Member deleted
    /// - `Err(AppError::NotFound)` - No member with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MemberRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Member not found with ID: {}",
                id
            )));
        }

        tracing::info!("Member deleted with ID {}", id);
        Ok(())
    }

    /// Counts members whose status is `ACTIVE`.
    pub async fn active_count(&self) -> Result<u64, AppError> {
        Ok(MemberRepository::new(self.db)
            .count_by_status(MemberStatus::Active)
            .await?)
    }
}

fn validate_profile(profile: &MemberProfile) -> Result<(), AppError> {
    let required = [
        ("First name", &profile.first_name),
        ("Last name", &profile.last_name),
        ("Phone", &profile.phone),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }
    }

    Ok(())
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
