use super::*;

/// Tests counting active members.
///
/// Expected: Ok with only ACTIVE members counted
#[tokio::test]
async fn counts_only_active_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let generator = MemberCodeGenerator::init(db.clone(), FixedClock(april_7()), 10).await;
    let service = MemberService::new(db, &generator);

    let first = service.create(create_param("Asha", "Rao")).await?;
    service.create(create_param("Vikram", "Shah")).await?;
    factory::member::MemberFactory::new(db)
        .status("EXPIRED")
        .build()
        .await?;

    service
        .update(
            first.id,
            UpdateMemberParam {
                profile: create_param("Asha", "Rao").profile,
                status: Some(MemberStatus::Suspended),
            },
        )
        .await?;

    assert_eq!(service.active_count().await?, 1);

    Ok(())
}
