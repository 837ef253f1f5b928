use super::*;

/// Tests updating a member's profile and status.
///
/// Verifies that the profile and status change while the code and join date stay.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_profile_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let created = repo
        .create(
            CreateMemberParam {
                profile: profile("Asha", "Rao"),
                ..Default::default()
            },
            "M202404070001".to_string(),
            april_7(),
        )
        .await?;

    let mut new_profile = profile("Asha", "Menon");
    new_profile.city = Some("Pune".to_string());

    let updated = repo
        .update(
            created.id,
            UpdateMemberParam {
                profile: new_profile,
                status: Some(MemberStatus::Suspended),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.last_name, "Menon");
    assert_eq!(updated.city.as_deref(), Some("Pune"));
    assert_eq!(updated.status, MemberStatus::Suspended);
    assert_eq!(updated.member_code, "M202404070001");
    assert_eq!(updated.join_date, april_7());
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests that omitting the status keeps the current one.
///
/// Expected: Ok(Some) with status unchanged
#[tokio::test]
async fn keeps_status_when_not_given() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .status("EXPIRED")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateMemberParam {
                profile: profile("Asha", "Rao"),
                status: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, MemberStatus::Expired);

    Ok(())
}

/// Tests updating a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let result = repo
        .update(
            42,
            UpdateMemberParam {
                profile: profile("Asha", "Rao"),
                status: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
