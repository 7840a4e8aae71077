//! Exercises the PostgreSQL repository against a real database.
//!
//! Run with `cargo test -- --ignored` and `DATABASE_URL` pointing at a server that
//! allows creating test databases.

use sqlx::PgPool;

use city_explorer::domain::entities::{NewLocation, PurgeTable};
use city_explorer::domain::repositories::LocationRepository;
use city_explorer::infrastructure::persistence::{PgLocationRepository, Store};

fn repository(pool: PgPool) -> PgLocationRepository {
    PgLocationRepository::new(Store::from_pool(pool))
}

fn new_location(search_query: &str) -> NewLocation {
    NewLocation {
        search_query: search_query.to_string(),
        formatted_query: format!("{search_query}, USA"),
        latitude: 39.74,
        longitude: -104.98,
    }
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_insert_and_find_by_search_query(pool: PgPool) {
    let repo = repository(pool);

    let id = repo
        .insert_or_ignore(&new_location("Denver"))
        .await
        .unwrap()
        .expect("first insert returns an id");

    let found = repo.find_by_search_query("Denver").await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.formatted_query, "Denver, USA");
    assert_eq!(found.latitude, 39.74);
    assert_eq!(found.longitude, -104.98);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_conflicting_insert_is_ignored(pool: PgPool) {
    let repo = repository(pool.clone());

    let first = repo.insert_or_ignore(&new_location("Denver")).await.unwrap();
    let second = repo.insert_or_ignore(&new_location("Denver")).await.unwrap();

    assert!(first.is_some());
    assert!(second.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_find_is_exact_match(pool: PgPool) {
    let repo = repository(pool);
    repo.insert_or_ignore(&new_location("Austin")).await.unwrap();

    assert!(repo.find_by_search_query("austin").await.unwrap().is_none());
    assert!(repo.find_by_search_query("Austin ").await.unwrap().is_none());
    assert!(repo.find_by_search_query("Austin").await.unwrap().is_some());
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_search_query_is_bound_not_interpolated(pool: PgPool) {
    let repo = repository(pool);
    let hostile = "x'; DROP TABLE locations; --";

    repo.insert_or_ignore(&new_location(hostile)).await.unwrap();

    let found = repo.find_by_search_query(hostile).await.unwrap().unwrap();
    assert_eq!(found.search_query, hostile);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_delete_by_location_id_only_touches_that_location(pool: PgPool) {
    let repo = repository(pool.clone());
    let keep = repo
        .insert_or_ignore(&new_location("Keep"))
        .await
        .unwrap()
        .unwrap();
    let purge = repo
        .insert_or_ignore(&new_location("Purge"))
        .await
        .unwrap()
        .unwrap();

    for location_id in [keep, purge, purge] {
        sqlx::query("INSERT INTO movies (location_id, title) VALUES ($1, 'Heat')")
            .bind(location_id)
            .execute(&pool)
            .await
            .unwrap();
    }

    let deleted = repo
        .delete_by_location_id(PurgeTable::Movies, purge)
        .await
        .unwrap();
    assert_eq!(deleted, 2);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 1);

    let none = repo
        .delete_by_location_id(PurgeTable::Weathers, purge)
        .await
        .unwrap();
    assert_eq!(none, 0);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_list_recent_is_newest_first(pool: PgPool) {
    let repo = repository(pool);
    for query in ["One", "Two", "Three"] {
        repo.insert_or_ignore(&new_location(query)).await.unwrap();
    }

    let recent = repo.list_recent(2).await.unwrap();
    let queries: Vec<_> = recent.iter().map(|l| l.search_query.as_str()).collect();
    assert_eq!(queries, vec!["Three", "Two"]);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_ping(pool: PgPool) {
    assert!(repository(pool).ping().await.is_ok());
}
