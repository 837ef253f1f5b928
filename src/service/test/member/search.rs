use super::*;

/// Tests searching members through the service.
///
/// Expected: Ok with the matching page and paging metadata
#[tokio::test]
async fn returns_paginated_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let generator = MemberCodeGenerator::init(db.clone(), FixedClock(april_7()), 10).await;
    let service = MemberService::new(db, &generator);

    service.create(create_param("Asha", "Rao")).await?;
    service.create(create_param("Asha", "Menon")).await?;
    service.create(create_param("Vikram", "Shah")).await?;

    let page = service.search("asha", 0, 1).await?;

    assert_eq!(page.members.len(), 1);
    assert_eq!(page.members[0].last_name, "Rao");
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 0);
    assert_eq!(page.per_page, 1);

    Ok(())
}

/// Tests that a zero page size is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_zero_page_size() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let generator = MemberCodeGenerator::new(db.clone(), FixedClock(april_7()), 10);
    let service = MemberService::new(db, &generator);

    assert!(matches!(
        service.search("", 0, 0).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
