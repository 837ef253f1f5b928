use super::*;

/// Tests updating a member through the service.
///
/// Expected: Ok with the profile changed and the member code kept
#[tokio::test]
async fn updates_member_and_keeps_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let generator = MemberCodeGenerator::init(db.clone(), FixedClock(april_7()), 10).await;
    let service = MemberService::new(db, &generator);

    let created = service.create(create_param("Asha", "Rao")).await?;

    let updated = service
        .update(
            created.id,
            UpdateMemberParam {
                profile: create_param("Asha", "Menon").profile,
                status: Some(MemberStatus::Inactive),
            },
        )
        .await?;

    assert_eq!(updated.last_name, "Menon");
    assert_eq!(updated.status, MemberStatus::Inactive);
    assert_eq!(updated.member_code, created.member_code);

    Ok(())
}

/// Tests updating with invalid input or an unknown member.
///
/// Expected: Err(BadRequest) for a blank name, Err(NotFound) for a missing member
#[tokio::test]
async fn rejects_invalid_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let generator = MemberCodeGenerator::init(db.clone(), FixedClock(april_7()), 10).await;
    let service = MemberService::new(db, &generator);

    let created = service.create(create_param("Asha", "Rao")).await?;

    let blank = UpdateMemberParam {
        profile: create_param("", "Rao").profile,
        status: None,
    };
    assert!(matches!(
        service.update(created.id, blank).await,
        Err(AppError::BadRequest(_))
    ));

    let missing = UpdateMemberParam {
        profile: create_param("Asha", "Rao").profile,
        status: None,
    };
    assert!(matches!(
        service.update(created.id + 1, missing).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
