use crate::{
    error::{member_code::MemberCodeError, AppError},
    model::member::{CreateMemberParam, MemberProfile, MemberStatus, UpdateMemberParam},
    service::{
        member::MemberService,
        member_code::{clock::FixedClock, MemberCodeGenerator},
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod active_count;
mod delete;
mod search;
mod update;

fn april_7() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 7).unwrap()
}

fn create_param(first_name: &str, last_name: &str) -> CreateMemberParam {
    CreateMemberParam {
        gym_id: Some(1),
        user_id: None,
        profile: MemberProfile {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: "5550001111".to_string(),
            ..Default::default()
        },
    }
}
