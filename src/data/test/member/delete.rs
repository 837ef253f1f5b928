use super::*;

/// Tests deleting a member.
///
/// Expected: Ok(true) on first delete, Ok(false) afterwards
#[tokio::test]
async fn deletes_member_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());
    assert!(!repo.delete(created.id).await?);

    Ok(())
}
