use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    fyyur_db::health_check(&pool).await.unwrap();

    for table in ["venues", "artists", "shows"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Shows must reference an existing venue and artist.
#[sqlx::test(migrations = "./migrations")]
async fn test_show_foreign_keys_enforced(pool: PgPool) {
    let result = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (1, 1, NOW())")
        .execute(&pool)
        .await;
    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

/// Empty genre arrays are refused by the schema itself.
#[sqlx::test(migrations = "./migrations")]
async fn test_empty_genres_rejected_by_schema(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO artists (name, city, state, genres) VALUES ('x', 'y', 'CA', '{}')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}
