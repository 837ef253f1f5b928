//! Domain models for gym members.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Membership standing of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatus {
    Active,
    Inactive,
    Suspended,
    Expired,
}

impl MemberStatus {
    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Expired => "EXPIRED",
        }
    }
}

impl FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "SUSPENDED" => Ok(Self::Suspended),
            "EXPIRED" => Ok(Self::Expired),
            other => Err(format!("unknown member status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Value stored in the `gender` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            "OTHER" => Ok(Self::Other),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

/// Gym member with contact, emergency and health details.
///
/// The member code is assigned once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: i32,
    /// Generated code, e.g. `M202404070001`.
    pub member_code: String,
    /// Gym (tenant) the member belongs to.
    pub gym_id: Option<i32>,
    /// Linked login account, if the member has one.
    pub user_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relation: Option<String>,
    pub medical_conditions: Option<String>,
    pub allergies: Option<String>,
    pub fitness_goals: Option<String>,
    pub profile_image: Option<String>,
    pub status: MemberStatus,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member domain model
    /// - `Err(DbErr::Type)` - The stored status or gender is not a known value
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, DbErr> {
        let status = entity.status.parse::<MemberStatus>().map_err(DbErr::Type)?;
        let gender = entity
            .gender
            .as_deref()
            .map(Gender::from_str)
            .transpose()
            .map_err(DbErr::Type)?;

        Ok(Self {
            id: entity.id,
            member_code: entity.member_code,
            gym_id: entity.gym_id,
            user_id: entity.user_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            date_of_birth: entity.date_of_birth,
            gender,
            address: entity.address,
            city: entity.city,
            state: entity.state,
            pincode: entity.pincode,
            emergency_contact_name: entity.emergency_contact_name,
            emergency_contact_phone: entity.emergency_contact_phone,
            emergency_contact_relation: entity.emergency_contact_relation,
            medical_conditions: entity.medical_conditions,
            allergies: entity.allergies,
            fitness_goals: entity.fitness_goals,
            profile_image: entity.profile_image,
            status,
            join_date: entity.join_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Editable personal details shared by member creation and updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relation: Option<String>,
    pub medical_conditions: Option<String>,
    pub allergies: Option<String>,
    pub fitness_goals: Option<String>,
}

/// Parameters for creating a new member.
///
/// The member code, status and join date are assigned by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMemberParam {
    pub gym_id: Option<i32>,
    pub user_id: Option<i32>,
    pub profile: MemberProfile,
}

/// Parameters for updating an existing member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMemberParam {
    pub profile: MemberProfile,
    /// New status; `None` keeps the current one.
    pub status: Option<MemberStatus>,
}

/// Page of members matching a search.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedMembers {
    pub members: Vec<Member>,
    /// Total number of pages for the search.
    pub total_pages: u64,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}
