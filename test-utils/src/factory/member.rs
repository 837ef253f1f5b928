//! Member factory for creating test member entities.
//!
//! Default member codes use the `T` prefix so they never collide with codes issued by
//! the generator under test.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .member_code("M202404070001")
///     .status("SUSPENDED")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    member_code: String,
    gym_id: Option<i32>,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: String,
    status: String,
    join_date: NaiveDate,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - member_code: `"T{id:012}"` where id is auto-incremented
    /// - first_name: `"Member"`, last_name: `"{id}"`
    /// - email: `"member{id}@example.com"`
    /// - phone: `"555{id:07}"`
    /// - status: `"ACTIVE"`
    /// - join_date: today (UTC)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MemberFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            member_code: format!("T{:012}", id),
            gym_id: None,
            first_name: "Member".to_string(),
            last_name: id.to_string(),
            email: Some(format!("member{}@example.com", id)),
            phone: format!("555{:07}", id),
            status: "ACTIVE".to_string(),
            join_date: Utc::now().date_naive(),
        }
    }

    /// Sets the member code.
    pub fn member_code(mut self, member_code: impl Into<String>) -> Self {
        self.member_code = member_code.into();
        self
    }

    /// Sets the gym the member belongs to.
    pub fn gym_id(mut self, gym_id: i32) -> Self {
        self.gym_id = Some(gym_id);
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(str::to_string);
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the stored status value (`ACTIVE`, `INACTIVE`, `SUSPENDED`, `EXPIRED`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn join_date(mut self, join_date: NaiveDate) -> Self {
        self.join_date = join_date;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();
        entity::member::ActiveModel {
            member_code: ActiveValue::Set(self.member_code),
            gym_id: ActiveValue::Set(self.gym_id),
            user_id: ActiveValue::Set(None),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            date_of_birth: ActiveValue::Set(None),
            gender: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            pincode: ActiveValue::Set(None),
            emergency_contact_name: ActiveValue::Set(None),
            emergency_contact_phone: ActiveValue::Set(None),
            emergency_contact_relation: ActiveValue::Set(None),
            medical_conditions: ActiveValue::Set(None),
            allergies: ActiveValue::Set(None),
            fitness_goals: ActiveValue::Set(None),
            profile_image: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            join_date: ActiveValue::Set(self.join_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates a member holding a specific member code.
///
/// Shorthand for `MemberFactory::new(db).member_code(code).build().await`.
pub async fn create_member_with_code(
    db: &DatabaseConnection,
    member_code: impl Into<String>,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).member_code(member_code).build().await
}
