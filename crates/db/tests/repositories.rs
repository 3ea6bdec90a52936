//! Repository tests for cart and favorite write paths.

use sqlx::PgPool;
use vitrine_db::models::user::{CreateUser, User};
use vitrine_db::repositories::{CartRepo, FavoriteRepo, UserRepo};

async fn seed_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: None,
            name: None,
        },
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn upsert_add_inserts_then_merges(pool: PgPool) {
    let user = seed_user(&pool, "cart@test.com").await;

    let first = CartRepo::upsert_add(&pool, user.id, "42", 2, 9.99).await.unwrap();
    assert!(first.inserted);
    assert_eq!(first.item.quantity, 2);

    let second = CartRepo::upsert_add(&pool, user.id, "42", 3, 5.00).await.unwrap();
    assert!(!second.inserted);
    assert_eq!(second.item.id, first.item.id);
    assert_eq!(second.item.quantity, 5);
    // Merge keeps the price from the original line.
    assert_eq!(second.item.price, 9.99);

    let lines = CartRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(lines.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn cart_lines_are_scoped_per_user(pool: PgPool) {
    let alice = seed_user(&pool, "alice@test.com").await;
    let bob = seed_user(&pool, "bob@test.com").await;

    let line = CartRepo::upsert_add(&pool, alice.id, "7", 1, 3.50).await.unwrap();

    // Bob's update and delete against Alice's line are no-ops.
    let updated = CartRepo::update_quantity(&pool, line.item.id, bob.id, 9).await.unwrap();
    assert!(updated.is_none());
    assert!(!CartRepo::delete(&pool, line.item.id, bob.id).await.unwrap());

    let updated = CartRepo::update_quantity(&pool, line.item.id, alice.id, 9)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.quantity, 9);
    assert!(CartRepo::delete(&pool, line.item.id, alice.id).await.unwrap());
    assert!(CartRepo::list_for_user(&pool, alice.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn favorite_insert_rejects_duplicate(pool: PgPool) {
    let user = seed_user(&pool, "fav@test.com").await;

    let first = FavoriteRepo::insert(&pool, user.id, "13").await.unwrap();
    assert!(first.is_some());

    let second = FavoriteRepo::insert(&pool, user.id, "13").await.unwrap();
    assert!(second.is_none());

    let favorites = FavoriteRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(favorites.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn favorite_same_product_allowed_across_users(pool: PgPool) {
    let alice = seed_user(&pool, "alice@test.com").await;
    let bob = seed_user(&pool, "bob@test.com").await;

    assert!(FavoriteRepo::insert(&pool, alice.id, "13").await.unwrap().is_some());
    assert!(FavoriteRepo::insert(&pool, bob.id, "13").await.unwrap().is_some());

    let fav = FavoriteRepo::insert(&pool, alice.id, "99").await.unwrap().unwrap();
    assert!(FavoriteRepo::delete(&pool, fav.id, alice.id).await.unwrap());
    assert!(!FavoriteRepo::delete(&pool, fav.id, alice.id).await.unwrap());
}
