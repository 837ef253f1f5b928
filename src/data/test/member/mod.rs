use crate::{
    data::member::MemberRepository,
    model::member::{CreateMemberParam, MemberProfile, MemberStatus, UpdateMemberParam},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_status;
mod delete;
mod find_by_code;
mod search;
mod update;

fn profile(first_name: &str, last_name: &str) -> MemberProfile {
    MemberProfile {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: "5550001111".to_string(),
        ..Default::default()
    }
}

fn april_7() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 7).unwrap()
}
