//! Member data repository for database operations.
//!
//! This module provides the `MemberRepository` for managing member records. Besides
//! the usual CRUD operations it exposes the code lookups used by the member code
//! generator.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::member::{
    CreateMemberParam, Member, MemberProfile, MemberStatus, UpdateMemberParam,
};

/// Repository providing database operations for members.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active member with the given code.
    ///
    /// # Arguments
    /// - `param` - Member details
    /// - `member_code` - Code generated for the member
    /// - `join_date` - Day the member joined
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(DbErr)` - Database error, including a unique violation when the code
    ///   is already taken
    pub async fn create(
        &self,
        param: CreateMemberParam,
        member_code: String,
        join_date: NaiveDate,
    ) -> Result<Member, DbErr> {
        let now = Utc::now();
        let mut model = entity::member::ActiveModel {
            member_code: ActiveValue::Set(member_code),
            gym_id: ActiveValue::Set(param.gym_id),
            user_id: ActiveValue::Set(param.user_id),
            status: ActiveValue::Set(MemberStatus::Active.as_str().to_string()),
            join_date: ActiveValue::Set(join_date),
            profile_image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_profile(&mut model, param.profile);

        let entity = model.insert(self.db).await?;

        Member::from_entity(entity)
    }

    /// Finds a member by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        entity::prelude::Member::find_by_id(id)
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Finds a member by member code.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member holds that code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_code(&self, member_code: &str) -> Result<Option<Member>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::MemberCode.eq(member_code))
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Checks whether a member holds exactly this code.
    ///
    /// # Returns
    /// - `Ok(true)` - Code is taken
    /// - `Ok(false)` - Code is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists_by_code(&self, member_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::MemberCode.eq(member_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all member codes starting with `prefix`, highest first.
    ///
    /// Codes share a fixed width, so descending text order is descending sequence
    /// order for a single day prefix.
    ///
    /// # Arguments
    /// - `prefix` - Code prefix such as `M20240407`
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Matching codes ordered descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_codes_by_prefix(&self, prefix: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Member::find()
            .select_only()
            .column(entity::member::Column::MemberCode)
            .filter(entity::member::Column::MemberCode.starts_with(prefix))
            .order_by_desc(entity::member::Column::MemberCode)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Searches members by name, email or phone with pagination.
    ///
    /// Matches `term` anywhere in the first name, last name, email or phone. Matching
    /// follows the backend's `LIKE` semantics, which ignore ASCII case on SQLite. An
    /// empty term matches every member. Results are ordered by ID.
    ///
    /// # Arguments
    /// - `term` - Search text
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of members per page
    ///
    /// # Returns
    /// - `Ok((members, total_pages))` - Members on the requested page and page count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn search(
        &self,
        term: &str,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Member>, u64), DbErr> {
        let term = term.trim();
        let mut query = entity::prelude::Member::find();

        if !term.is_empty() {
            query = query.filter(
                Condition::any()
                    .add(entity::member::Column::FirstName.contains(term))
                    .add(entity::member::Column::LastName.contains(term))
                    .add(entity::member::Column::Email.contains(term))
                    .add(entity::member::Column::Phone.contains(term)),
            );
        }

        let paginator = query
            .order_by_asc(entity::member::Column::Id)
            .paginate(self.db, per_page);

        let total_pages = paginator.num_pages().await?;
        let members = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((members, total_pages))
    }

    /// Updates a member's profile and optionally their status.
    ///
    /// The member code and join date are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The updated member
    /// - `Ok(None)` - No member with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateMemberParam) -> Result<Option<Member>, DbErr> {
        let Some(entity) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut model = entity.into_active_model();
        apply_profile(&mut model, param.profile);
        if let Some(status) = param.status {
            model.status = ActiveValue::Set(status.as_str().to_string());
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        let entity = model.update(self.db).await?;

        Member::from_entity(entity).map(Some)
    }

    /// Deletes a member.
    ///
    /// # Returns
    /// - `Ok(true)` - Member deleted
    /// - `Ok(false)` - No member with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts members with the given status.
    pub async fn count_by_status(&self, status: MemberStatus) -> Result<u64, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}

fn apply_profile(model: &mut entity::member::ActiveModel, profile: MemberProfile) {
    model.first_name = ActiveValue::Set(profile.first_name);
    model.last_name = ActiveValue::Set(profile.last_name);
    model.email = ActiveValue::Set(profile.email);
    model.phone = ActiveValue::Set(profile.phone);
    model.date_of_birth = ActiveValue::Set(profile.date_of_birth);
    model.gender = ActiveValue::Set(profile.gender.map(|g| g.as_str().to_string()));
    model.address = ActiveValue::Set(profile.address);
    model.city = ActiveValue::Set(profile.city);
    model.state = ActiveValue::Set(profile.state);
    model.pincode = ActiveValue::Set(profile.pincode);
    model.emergency_contact_name = ActiveValue::Set(profile.emergency_contact_name);
    model.emergency_contact_phone = ActiveValue::Set(profile.emergency_contact_phone);
    model.emergency_contact_relation = ActiveValue::Set(profile.emergency_contact_relation);
    model.medical_conditions = ActiveValue::Set(profile.medical_conditions);
    model.allergies = ActiveValue::Set(profile.allergies);
    model.fitness_goals = ActiveValue::Set(profile.fitness_goals);
}
