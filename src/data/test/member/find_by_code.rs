use super::*;

/// Tests finding a member by code.
///
/// Expected: Ok(Some) for an existing code, Ok(None) otherwise
#[tokio::test]
async fn finds_member_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member_with_code(db, "M202404070007").await?;

    let repo = MemberRepository::new(db);
    let found = repo.find_by_code("M202404070007").await?;

    assert_eq!(found.map(|m| m.id), Some(created.id));
    assert!(repo.find_by_code("M202404070008").await?.is_none());

    Ok(())
}

/// Tests finding a member by ID.
///
/// Expected: Ok(Some) for an existing ID, Ok(None) otherwise
#[tokio::test]
async fn finds_member_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert_eq!(found.map(|m| m.member_code), Some(created.member_code));
    assert!(repo.find_by_id(created.id + 1).await?.is_none());

    Ok(())
}

/// Tests that an unknown stored status surfaces as a type error.
///
/// Expected: Err(DbErr::Type)
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .member_code("M202404070001")
        .status("FROZEN")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let result = repo.find_by_code("M202404070001").await;

    assert!(matches!(result, Err(DbErr::Type(_))));

    Ok(())
}
