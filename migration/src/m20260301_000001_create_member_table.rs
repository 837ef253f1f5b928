use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string_uniq(Member::MemberCode))
                    .col(integer_null(Member::GymId))
                    .col(integer_null(Member::UserId))
                    .col(string(Member::FirstName))
                    .col(string(Member::LastName))
                    .col(string_null(Member::Email))
                    .col(string(Member::Phone))
                    .col(date_null(Member::DateOfBirth))
                    .col(string_null(Member::Gender))
                    .col(text_null(Member::Address))
                    .col(string_null(Member::City))
                    .col(string_null(Member::State))
                    .col(string_null(Member::Pincode))
                    .col(string_null(Member::EmergencyContactName))
                    .col(string_null(Member::EmergencyContactPhone))
                    .col(string_null(Member::EmergencyContactRelation))
                    .col(text_null(Member::MedicalConditions))
                    .col(text_null(Member::Allergies))
                    .col(text_null(Member::FitnessGoals))
                    .col(string_null(Member::ProfileImage))
                    .col(string(Member::Status).default("ACTIVE"))
                    .col(date(Member::JoinDate))
                    .col(timestamp_with_time_zone(Member::CreatedAt))
                    .col(timestamp_with_time_zone(Member::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Active member counts filter on status.
        manager
            .create_index(
                Index::create()
                    .name("idx_member_status")
                    .table(Member::Table)
                    .col(Member::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    MemberCode,
    GymId,
    UserId,
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Gender,
    Address,
    City,
    State,
    Pincode,
    EmergencyContactName,
    EmergencyContactPhone,
    EmergencyContactRelation,
    MedicalConditions,
    Allergies,
    FitnessGoals,
    ProfileImage,
    Status,
    JoinDate,
    CreatedAt,
    UpdatedAt,
}
