use super::*;

/// Tests searching by name, email and phone.
///
/// Expected: Ok with only matching members, regardless of ASCII case
#[tokio::test]
async fn matches_name_email_and_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .first_name("Asha")
        .last_name("Rao")
        .email(Some("asha@example.org"))
        .phone("9000000001")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .first_name("Vikram")
        .last_name("Shah")
        .email(None)
        .phone("9000000002")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    let (by_name, _) = repo.search("asha", 0, 10).await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].first_name, "Asha");

    let (by_last_name, _) = repo.search("SHAH", 0, 10).await?;
    assert_eq!(by_last_name.len(), 1);
    assert_eq!(by_last_name[0].first_name, "Vikram");

    let (by_email, _) = repo.search("example.org", 0, 10).await?;
    assert_eq!(by_email.len(), 1);

    let (by_phone, _) = repo.search("900000000", 0, 10).await?;
    assert_eq!(by_phone.len(), 2);

    let (none, total_pages) = repo.search("nobody", 0, 10).await?;
    assert!(none.is_empty());
    assert_eq!(total_pages, 0);

    Ok(())
}

/// Tests paginating search results.
///
/// Expected: Ok with pages ordered by ID and the total page count
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_member(db).await?.id);
    }

    let repo = MemberRepository::new(db);

    let (first, total_pages) = repo.search("", 0, 2).await?;
    assert_eq!(total_pages, 3);
    assert_eq!(
        first.iter().map(|m| m.id).collect::<Vec<_>>(),
        ids[0..2].to_vec()
    );

    let (last, _) = repo.search("  ", 2, 2).await?;
    assert_eq!(last.iter().map(|m| m.id).collect::<Vec<_>>(), vec![ids[4]]);

    Ok(())
}
