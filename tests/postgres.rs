//! Store round trip against a live PostgreSQL. Run with `DATABASE_URL=... cargo test -- --ignored`.

use users_api::{ensure_users_table, PgUserStore, UserInput, UserStore};

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL database"]
async fn pg_store_crud_round_trip() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    ensure_users_table(&pool).await.unwrap();
    // Second call must be a no-op.
    ensure_users_table(&pool).await.unwrap();
    let store = PgUserStore::new(pool);

    let created = store
        .create(UserInput {
            name: "Ann".into(),
            email: "a@x.com".into(),
        })
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(store.get(created.id).await.unwrap(), Some(created.clone()));

    let updated = store
        .update(
            created.id,
            UserInput {
                name: "Bea".into(),
                email: String::new(),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Bea");
    assert!(store.list().await.unwrap().contains(&updated));

    assert!(store.delete(created.id).await.unwrap());
    assert_eq!(store.get(created.id).await.unwrap(), None);
    assert!(!store.delete(created.id).await.unwrap());
    assert_eq!(store.update(created.id, UserInput::default()).await.unwrap(), None);
    store.ping().await.unwrap();
}
