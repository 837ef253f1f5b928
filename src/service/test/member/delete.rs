use super::*;

/// Tests that deleted members' codes are not handed out again.
///
/// Expected: Ok with the next member receiving a fresh code
#[tokio::test]
async fn deleted_code_is_not_reused() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let generator = MemberCodeGenerator::init(db.clone(), FixedClock(april_7()), 10).await;
    let service = MemberService::new(db, &generator);

    let first = service.create(create_param("Asha", "Rao")).await?;
    service.delete(first.id).await?;

    let second = service.create(create_param("Vikram", "Shah")).await?;

    assert_eq!(first.member_code, "M202404070001");
    assert_eq!(second.member_code, "M202404070002");

    Ok(())
}

/// Tests deleting a member that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_member_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let generator = MemberCodeGenerator::new(db.clone(), FixedClock(april_7()), 10);
    let service = MemberService::new(db, &generator);

    assert!(matches!(service.delete(1).await, Err(AppError::NotFound(_))));

    Ok(())
}
