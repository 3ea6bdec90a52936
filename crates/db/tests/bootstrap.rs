//! Bootstrap tests: connect, migrate, verify schema conventions.

use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify the expected tables exist.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    vitrine_db::health_check(&pool).await.unwrap();

    let tables = ["users", "sessions", "cart_items", "favorites"];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 >= 0, "{table} should be queryable");
    }
}

/// Unique constraints follow the `uq_` naming convention the API error
/// classifier depends on for 409 mapping.
#[sqlx::test(migrations = "./migrations")]
async fn test_unique_constraints_use_uq_prefix(pool: PgPool) {
    let constraints: Vec<(String,)> = sqlx::query_as(
        "SELECT conname FROM pg_constraint
         WHERE contype = 'u'
           AND connamespace = 'public'::regnamespace",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!constraints.is_empty(), "expected unique constraints to exist");

    for (name,) in &constraints {
        assert!(
            name.starts_with("uq_"),
            "unique constraint {name} must start with uq_"
        );
    }

    let names: Vec<&str> = constraints.iter().map(|(n,)| n.as_str()).collect();
    assert!(names.contains(&"uq_cart_items_user_product"));
    assert!(names.contains(&"uq_favorites_user_product"));
    assert!(names.contains(&"uq_users_email"));
}

/// The quantity CHECK constraint bounds values on both sides at the
/// database level, independent of API validation. The constraint carries
/// the `ck_` prefix the API error classifier maps to 400.
#[sqlx::test(migrations = "./migrations")]
async fn test_quantity_check_constraint(pool: PgPool) {
    let user: (i64,) =
        sqlx::query_as("INSERT INTO users (email) VALUES ('check@test.com') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();

    let result = sqlx::query(
        "INSERT INTO cart_items (user_id, product_id, quantity, price) VALUES ($1, '1', 0, 1.0)",
    )
    .bind(user.0)
    .execute(&pool)
    .await;

    assert!(result.is_err(), "zero quantity must violate the CHECK constraint");

    let result = sqlx::query(
        "INSERT INTO cart_items (user_id, product_id, quantity, price)
         VALUES ($1, '1', 1000001, 1.0)",
    )
    .bind(user.0)
    .execute(&pool)
    .await;

    assert!(result.is_err(), "quantity above the ceiling must violate the CHECK constraint");

    let exists: (bool,) = sqlx::query_as(
        "SELECT EXISTS (SELECT 1 FROM pg_constraint WHERE conname = 'ck_cart_items_quantity_range')",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(exists.0, "range constraint must follow the ck_ naming convention");
}
