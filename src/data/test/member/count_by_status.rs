use super::*;

/// Tests counting members by status.
///
/// Expected: Ok with per-status counts
#[tokio::test]
async fn counts_members_per_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for status in ["ACTIVE", "ACTIVE", "SUSPENDED", "ACTIVE"] {
        factory::member::MemberFactory::new(db)
            .status(status)
            .build()
            .await?;
    }

    let repo = MemberRepository::new(db);

    assert_eq!(repo.count_by_status(MemberStatus::Active).await?, 3);
    assert_eq!(repo.count_by_status(MemberStatus::Suspended).await?, 1);
    assert_eq!(repo.count_by_status(MemberStatus::Expired).await?, 0);

    Ok(())
}
