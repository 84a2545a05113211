//! Stored-routine pass-through layer.
//!
//! Business rules (auth, balances, the purchase transaction, notification
//! fan-out) live in the database. This module only binds parameters and
//! maps result rows; row-returning routines are SQL functions invoked as
//! `SELECT * FROM sp_x(...)`, the transactional purchase is a procedure.

use crate::models::{
    ArtworkListRow, CreatedArtworkRow, Notification, OwnedArtworkRow, UpdateStatus, UserProfile,
    UserSummary,
};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

pub async fn user_create(
    pool: &PgPool,
    username: &str,
    full_name: &str,
    password_hash: &str,
) -> Result<UserSummary, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>("SELECT * FROM sp_user_create($1, $2, $3)")
        .bind(username)
        .bind(full_name)
        .bind(password_hash)
        .fetch_one(pool)
        .await
}

pub async fn auth_login(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<Option<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>("SELECT * FROM sp_auth_login($1, $2)")
        .bind(username)
        .bind(password_hash)
        .fetch_optional(pool)
        .await
}

pub async fn get_user_profile(
    pool: &PgPool,
    user_id: i32,
) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>("SELECT * FROM sp_get_user_profile($1)")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn update_user_profile(
    pool: &PgPool,
    user_id: i32,
    username: Option<&str>,
    full_name: Option<&str>,
    new_password_hash: Option<&str>,
    current_password_hash: &str,
) -> Result<UpdateStatus, sqlx::Error> {
    let row = sqlx::query("SELECT status FROM sp_update_user_profile($1, $2, $3, $4, $5)")
        .bind(user_id)
        .bind(username)
        .bind(full_name)
        .bind(new_password_hash)
        .bind(current_password_hash)
        .fetch_optional(pool)
        .await?;
    Ok(match row {
        Some(row) => UpdateStatus::from(row.try_get::<String, _>("status")?.as_str()),
        None => UpdateStatus::NotFound,
    })
}

/// Returns the new balance, or None if the user does not exist.
pub async fn add_balance(
    pool: &PgPool,
    user_id: i32,
    amount: Decimal,
) -> Result<Option<Decimal>, sqlx::Error> {
    let row = sqlx::query("SELECT new_balance FROM sp_add_balance($1, $2)")
        .bind(user_id)
        .bind(amount)
        .fetch_optional(pool)
        .await?;
    row.map(|r| r.try_get("new_balance")).transpose()
}

pub async fn set_user_photo(
    pool: &PgPool,
    user_id: i32,
    photo_key: &str,
) -> Result<UpdateStatus, sqlx::Error> {
    let row = sqlx::query("SELECT status FROM sp_set_user_photo($1, $2)")
        .bind(user_id)
        .bind(photo_key)
        .fetch_optional(pool)
        .await?;
    Ok(match row {
        Some(row) => UpdateStatus::from(row.try_get::<String, _>("status")?.as_str()),
        None => UpdateStatus::NotFound,
    })
}

/// Outer None: the user does not exist. Inner None: no photo set.
pub async fn get_user_photo(
    pool: &PgPool,
    user_id: i32,
) -> Result<Option<Option<String>>, sqlx::Error> {
    let row = sqlx::query("SELECT photo_url FROM sp_get_user_photo($1)")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    row.map(|r| r.try_get("photo_url")).transpose()
}

pub async fn get_notifications(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<Notification>, sqlx::Error> {
    sqlx::query_as::<_, Notification>("SELECT * FROM sp_get_notifications($1)")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn mark_notification_read(
    pool: &PgPool,
    user_id: i32,
    notification_id: i32,
) -> Result<UpdateStatus, sqlx::Error> {
    let row = sqlx::query("SELECT status FROM sp_mark_notification_read($1, $2)")
        .bind(user_id)
        .bind(notification_id)
        .fetch_optional(pool)
        .await?;
    Ok(match row {
        Some(row) => UpdateStatus::from(row.try_get::<String, _>("status")?.as_str()),
        None => UpdateStatus::NotFound,
    })
}

pub async fn artworks_list(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<ArtworkListRow>, sqlx::Error> {
    sqlx::query_as::<_, ArtworkListRow>("SELECT * FROM sp_artworks_list($1, $2)")
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn artworks_created(
    pool: &PgPool,
    owner_id: i32,
    limit: i64,
    offset: i64,
) -> Result<Vec<CreatedArtworkRow>, sqlx::Error> {
    sqlx::query_as::<_, CreatedArtworkRow>("SELECT * FROM sp_artworks_created($1, $2, $3)")
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn artworks_mine(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<OwnedArtworkRow>, sqlx::Error> {
    sqlx::query_as::<_, OwnedArtworkRow>("SELECT * FROM sp_artworks_mine($1)")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Inserts the published artwork record and returns its id. Insert rules
/// (duplicate image keys, ownership rows) live in DB triggers.
pub async fn artwork_publish(
    pool: &PgPool,
    user_id: i32,
    name: &str,
    price: Decimal,
    image_key: &str,
) -> Result<i32, sqlx::Error> {
    let row = sqlx::query("SELECT id FROM sp_artwork_publish($1, $2, $3, $4)")
        .bind(user_id)
        .bind(name)
        .bind(price)
        .bind(image_key)
        .fetch_one(pool)
        .await?;
    row.try_get("id")
}

/// Transactional purchase: validates availability and balance, moves
/// funds, transfers ownership and notifies both parties, all inside the
/// procedure. Business rejections arrive as RAISE EXCEPTION (P0001).
pub async fn purchase(pool: &PgPool, buyer_id: i32, artwork_id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("CALL sp_purchase($1, $2)")
        .bind(buyer_id)
        .bind(artwork_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn notify(
    pool: &PgPool,
    user_id: i32,
    kind: &str,
    title: &str,
    body: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT sp_notify($1, $2, $3, $4)")
        .bind(user_id)
        .bind(kind)
        .bind(title)
        .bind(body)
        .execute(pool)
        .await?;
    Ok(())
}
