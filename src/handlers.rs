use crate::config::Config;
use crate::db;
use crate::models::{
    ArtworkItem, BalanceRequest, BalanceResponse, CreatedArtworkItem, LoginRequest, Notification,
    OwnedArtworkItem, OwnerParams, PageParams, PhotoResponse, PublishResponse, PurchaseRequest,
    PurchaseResponse, RegisterResponse, UpdateProfileRequest, UpdateResponse, UpdateStatus,
    UserProfile, UserSummary, ARTWORK_FOLDER, PROFILE_PHOTO_FOLDER,
};
use crate::storage::StorageBackend;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use md5::{Digest, Md5};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;
use std::sync::Arc;

/// Maximum file size for uploads (10 MB), matching the request body limit.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub storage: Arc<dyn StorageBackend>,
    pub config: Config,
}

/// Credential hash expected by the stored procedures: hex MD5 digest
/// truncated to 16 characters.
fn password_hash16(password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    let mut hash = hex::encode(hasher.finalize());
    hash.truncate(16);
    hash
}

/// Notification dispatch is a secondary effect: a failure is logged and
/// never fails the operation that triggered it.
async fn notify_best_effort(pool: &PgPool, user_id: i32, title: &str, body: &str) {
    if let Err(e) = db::notify(pool, user_id, "system", title, body).await {
        tracing::warn!("Failed to dispatch notification to user {}: {}", user_id, e);
    }
}

/// An image payload buffered out of a multipart field.
struct ImageUpload {
    bytes: Vec<u8>,
    mime_type: Option<String>,
}

async fn read_image_field(
    field: axum::extract::multipart::Field<'_>,
) -> Result<ImageUpload, (StatusCode, String)> {
    let mime_type = field.content_type().map(str::to_string);
    let data = field.bytes().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Failed to read image: {}", e),
        )
    })?;

    if data.len() > MAX_FILE_SIZE {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "File size {} bytes exceeds maximum allowed size of {} bytes",
                data.len(),
                MAX_FILE_SIZE
            ),
        ));
    }

    Ok(ImageUpload {
        bytes: data.to_vec(),
        mime_type,
    })
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, (StatusCode, String)> {
    field.text().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Failed to read field {}: {}", name, e),
        )
    })
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// POST /auth/register - Create a user, optionally with a profile photo.
///
/// The photo is a secondary effect: if the upload or the key persistence
/// fails, the user is still created and the response carries a warning.
pub async fn register(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<RegisterResponse>), (StatusCode, String)> {
    let mut username: Option<String> = None;
    let mut full_name: Option<String> = None;
    let mut password: Option<String> = None;
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid multipart data: {}", e),
        )
    })? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "username" => username = Some(read_text_field(field, "username").await?),
            "full_name" => full_name = Some(read_text_field(field, "full_name").await?),
            "password" => password = Some(read_text_field(field, "password").await?),
            "image" => image = Some(read_image_field(field).await?),
            _ => {}
        }
    }

    let (username, full_name, password) = match (username, full_name, password) {
        (Some(u), Some(f), Some(p)) if !u.trim().is_empty() && !f.trim().is_empty() && !p.is_empty() => {
            (u.trim().to_string(), f.trim().to_string(), p)
        }
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                "username, full_name and password are required".to_string(),
            ))
        }
    };

    let user = db::user_create(&state.db, &username, &full_name, &password_hash16(&password))
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map(|d| d.is_unique_violation())
                .unwrap_or(false)
            {
                (StatusCode::CONFLICT, "User already exists".to_string())
            } else {
                tracing::error!("Failed to create user: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to register".to_string(),
                )
            }
        })?;

    let mut photo_key: Option<String> = None;
    let had_image = image.is_some();
    if let Some(image) = image {
        match store_profile_photo(&state, user.id, image).await {
            Ok(key) => photo_key = Some(key),
            Err(e) => tracing::warn!("Registration photo upload failed for user {}: {}", user.id, e),
        }
    }

    notify_best_effort(
        &state.db,
        user.id,
        "Welcome to ArtGalleryCloud!",
        &format!("Hi {}, your account was created successfully.", full_name),
    )
    .await;

    let public_url = photo_key
        .as_deref()
        .map(|key| state.storage.public_url_from_key(key));
    let warning = (had_image && photo_key.is_none())
        .then(|| "The image could not be stored; the user was created without a photo.".to_string());

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            ok: true,
            id: user.id,
            username,
            full_name,
            balance: user.balance,
            photo_key,
            public_url,
            warning,
        }),
    ))
}

/// Store a profile photo and persist its key. Used by registration (where
/// failure is non-fatal) and by the photo endpoint (where it is not).
async fn store_profile_photo(
    state: &AppState,
    user_id: i32,
    image: ImageUpload,
) -> anyhow::Result<String> {
    let key = state
        .storage
        .upload(
            image.bytes,
            image.mime_type.as_deref(),
            PROFILE_PHOTO_FOLDER,
            &format!("u_{}", user_id),
        )
        .await?;
    db::set_user_photo(&state.db, user_id, &key).await?;
    Ok(key)
}

/// POST /auth/login - Validate credentials via the auth stored procedure.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserSummary>, (StatusCode, String)> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Missing fields".to_string()));
    }

    let user = db::auth_login(&state.db, &request.username, &password_hash16(&request.password))
        .await
        .map_err(|e| {
            tracing::error!("Login query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error".to_string(),
            )
        })?
        .ok_or_else(|| (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()))?;

    Ok(Json(user))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// GET /users/:id - User profile.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    let profile = db::get_user_profile(&state.db, user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load profile for user {}: {}", user_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load profile".to_string(),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "User does not exist".to_string()))?;

    Ok(Json(profile))
}

/// PUT /users/:id - Edit profile fields; the stored procedure validates
/// the current password and reports a status string.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateResponse>, (StatusCode, String)> {
    let current_password = request
        .current_password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                "current_password is required".to_string(),
            )
        })?;

    // Optional fields are passed as NULL when unchanged.
    let username = request
        .username
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let full_name = request
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let new_hash = request
        .new_password
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(password_hash16);

    let status = db::update_user_profile(
        &state.db,
        user_id,
        username,
        full_name,
        new_hash.as_deref(),
        &password_hash16(current_password),
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to update profile for user {}: {}", user_id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to update profile".to_string(),
        )
    })?;

    match status {
        UpdateStatus::InvalidPassword => Err((
            StatusCode::UNAUTHORIZED,
            "Current password is incorrect".to_string(),
        )),
        UpdateStatus::UsernameDup => Err((
            StatusCode::CONFLICT,
            "Username is already taken".to_string(),
        )),
        UpdateStatus::NotFound => {
            Err((StatusCode::NOT_FOUND, "User does not exist".to_string()))
        }
        UpdateStatus::NoChanges => Ok(Json(UpdateResponse {
            ok: true,
            message: Some("No changes to apply".to_string()),
        })),
        UpdateStatus::Ok | UpdateStatus::Other(_) => {
            notify_best_effort(
                &state.db,
                user_id,
                "Profile updated",
                "Your profile details were updated.",
            )
            .await;
            Ok(Json(UpdateResponse { ok: true, message: None }))
        }
    }
}

/// POST /users/:id/balance - Top up the account balance.
pub async fn add_balance(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(request): Json<BalanceRequest>,
) -> Result<Json<BalanceResponse>, (StatusCode, String)> {
    if request.amount <= Decimal::ZERO {
        return Err((
            StatusCode::BAD_REQUEST,
            "amount must be a number > 0".to_string(),
        ));
    }

    let balance = db::add_balance(&state.db, user_id, request.amount)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add balance for user {}: {}", user_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update balance".to_string(),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "User does not exist".to_string()))?;

    notify_best_effort(
        &state.db,
        user_id,
        "Balance topped up",
        &format!("Q{:.2} was credited to your account.", request.amount),
    )
    .await;

    Ok(Json(BalanceResponse { ok: true, balance }))
}

/// POST /users/:id/photo - Upload a profile photo.
///
/// Orchestration order matters: the object is stored first, its key is
/// persisted second, and the public URL is derived from the key for the
/// response only. A storage failure leaves no database record behind.
pub async fn upload_user_photo(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<Json<PhotoResponse>, (StatusCode, String)> {
    let mut image: Option<ImageUpload> = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid multipart data: {}", e),
        )
    })? {
        if field.name() == Some("image") {
            image = Some(read_image_field(field).await?);
        }
    }
    let image =
        image.ok_or_else(|| (StatusCode::BAD_REQUEST, "image is required".to_string()))?;

    let key = state
        .storage
        .upload(
            image.bytes,
            image.mime_type.as_deref(),
            PROFILE_PHOTO_FOLDER,
            &format!("u_{}", user_id),
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to store profile photo for user {}: {}", user_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not store the profile photo".to_string(),
            )
        })?;

    let status = db::set_user_photo(&state.db, user_id, &key)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save photo key for user {}: {}", user_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update the profile photo".to_string(),
            )
        })?;
    if status == UpdateStatus::NotFound {
        return Err((StatusCode::NOT_FOUND, "User does not exist".to_string()));
    }

    notify_best_effort(
        &state.db,
        user_id,
        "Profile photo updated",
        "Your profile photo was updated successfully.",
    )
    .await;

    let public_url = state.storage.public_url_from_key(&key);
    Ok(Json(PhotoResponse {
        ok: true,
        photo_key: key,
        public_url,
    }))
}

/// GET /users/:id/photo - Redirect to the photo's public URL, derived
/// from the stored key on every request.
pub async fn get_user_photo(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Response, (StatusCode, String)> {
    let photo = db::get_user_photo(&state.db, user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load photo key for user {}: {}", user_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load the photo".to_string(),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "User does not exist".to_string()))?;

    let key = photo.ok_or_else(|| (StatusCode::NOT_FOUND, "User has no photo".to_string()))?;
    let url = state.storage.public_url_from_key(&key);

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}

/// GET /users/:id/notifications
pub async fn get_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<Notification>>, (StatusCode, String)> {
    let notifications = db::get_notifications(&state.db, user_id).await.map_err(|e| {
        tracing::error!("Failed to load notifications for user {}: {}", user_id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to load notifications".to_string(),
        )
    })?;
    Ok(Json(notifications))
}

/// PUT /users/:id/notifications/:notification_id/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path((user_id, notification_id)): Path<(i32, i32)>,
) -> Result<Json<UpdateResponse>, (StatusCode, String)> {
    let status = db::mark_notification_read(&state.db, user_id, notification_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to mark notification {} read: {}", notification_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update the notification".to_string(),
            )
        })?;
    if status == UpdateStatus::NotFound {
        return Err((StatusCode::NOT_FOUND, "Notification not found".to_string()));
    }
    Ok(Json(UpdateResponse { ok: true, message: None }))
}

// ---------------------------------------------------------------------------
// Artworks
// ---------------------------------------------------------------------------

fn page_bounds(params: &PageParams) -> (i64, i64) {
    let limit = params.limit.unwrap_or(100).min(200);
    let offset = params.offset.unwrap_or(0).max(0);
    (limit, offset)
}

/// GET /artworks - Public listing. Every row's public URL is derived from
/// its stored key at response time.
pub async fn list_artworks(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<ArtworkItem>>, (StatusCode, String)> {
    let (limit, offset) = page_bounds(&params);
    let rows = db::artworks_list(&state.db, limit, offset).await.map_err(|e| {
        tracing::error!("Failed to list artworks: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to list artworks".to_string(),
        )
    })?;

    let data = rows
        .into_iter()
        .map(|r| ArtworkItem {
            public_url: state.storage.public_url_from_key(&r.url),
            id: r.id,
            name: r.name,
            image_name: r.image_name,
            url_key: r.url,
            price: r.price,
            is_available: r.is_available,
            seller_id: r.seller_id,
            seller: r.seller,
        })
        .collect();

    Ok(Json(data))
}

/// GET /artworks/created?userId=... - Artworks authored by a user.
pub async fn created_artworks(
    State(state): State<AppState>,
    Query(owner): Query<OwnerParams>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<CreatedArtworkItem>>, (StatusCode, String)> {
    let owner_id = owner
        .user_id
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "userId is required".to_string()))?;
    let (limit, offset) = page_bounds(&params);

    let rows = db::artworks_created(&state.db, owner_id, limit, offset)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load created artworks for {}: {}", owner_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load created artworks".to_string(),
            )
        })?;

    let data = rows
        .into_iter()
        .map(|a| CreatedArtworkItem {
            public_url: state.storage.public_url_from_key(&a.url),
            id: a.id,
            name: a.name,
            image_name: a.image_name,
            url_key: a.url,
            price: a.price,
            is_available: a.is_available,
            acquisition_type: a.acquisition_type,
            original_owner_id: a.original_owner_id,
            original_owner_full_name: a.original_owner_full_name,
            current_owner_id: a.current_owner_id,
            current_owner_full_name: a.current_owner_full_name,
            created_at: a.created_at,
            updated_at: a.updated_at,
        })
        .collect();

    Ok(Json(data))
}

/// GET /artworks/mine?userId=... - The user's inventory (authored and
/// purchased pieces).
pub async fn my_artworks(
    State(state): State<AppState>,
    Query(owner): Query<OwnerParams>,
) -> Result<Json<Vec<OwnedArtworkItem>>, (StatusCode, String)> {
    let user_id = owner
        .user_id
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "userId is required".to_string()))?;

    let rows = db::artworks_mine(&state.db, user_id).await.map_err(|e| {
        tracing::error!("Failed to load inventory for user {}: {}", user_id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to load the inventory".to_string(),
        )
    })?;

    let data = rows
        .into_iter()
        .map(|a| OwnedArtworkItem {
            public_url: state.storage.public_url_from_key(&a.url),
            id: a.id,
            name: a.name,
            image_name: a.image_name,
            url_key: a.url,
            price: a.price,
            is_available: a.is_available,
            acquisition_type: a.acquisition_type,
            seller_id: a.original_owner_id,
            seller: a.original_owner_full_name,
        })
        .collect();

    Ok(Json(data))
}

/// POST /artworks/upload - Publish an artwork: store the image, then let
/// the database insert the record (rules live in triggers + procedure).
pub async fn upload_artwork(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<PublishResponse>), (StatusCode, String)> {
    let mut user_id: Option<i32> = None;
    let mut name: Option<String> = None;
    let mut price: Option<Decimal> = None;
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid multipart data: {}", e),
        )
    })? {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "userId" => {
                let text = read_text_field(field, "userId").await?;
                user_id = Some(text.parse().map_err(|_| {
                    (StatusCode::BAD_REQUEST, "userId is required".to_string())
                })?);
            }
            "name" | "title" => {
                let text = read_text_field(field, "name").await?;
                if name.is_none() {
                    name = Some(text);
                }
            }
            "price" => {
                let text = read_text_field(field, "price").await?;
                price = Some(Decimal::from_str(text.trim()).map_err(|_| {
                    (
                        StatusCode::BAD_REQUEST,
                        "price must be a number >= 0".to_string(),
                    )
                })?);
            }
            "image" => image = Some(read_image_field(field).await?),
            _ => {}
        }
    }

    let user_id =
        user_id.ok_or_else(|| (StatusCode::BAD_REQUEST, "userId is required".to_string()))?;
    let image = image.ok_or_else(|| {
        (StatusCode::BAD_REQUEST, "image (file) is required".to_string())
    })?;
    let price = price.unwrap_or(Decimal::ZERO);
    if price < Decimal::ZERO {
        return Err((
            StatusCode::BAD_REQUEST,
            "price must be a number >= 0".to_string(),
        ));
    }
    let name = name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
    let name = name.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "name (artwork title) is required".to_string(),
        )
    })?;
    if name.len() > 255 {
        return Err((
            StatusCode::BAD_REQUEST,
            "name cannot exceed 255 characters".to_string(),
        ));
    }

    // Store the image first; a storage failure aborts before any record
    // is written.
    let key = state
        .storage
        .upload(
            image.bytes,
            image.mime_type.as_deref(),
            ARTWORK_FOLDER,
            &format!("art_{}", user_id),
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to store artwork image for user {}: {}", user_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not store the artwork image".to_string(),
            )
        })?;

    let id = db::artwork_publish(&state.db, user_id, &name, price, &key)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map(|d| d.is_unique_violation())
                .unwrap_or(false)
            {
                (
                    StatusCode::CONFLICT,
                    "This image has already been published".to_string(),
                )
            } else {
                tracing::error!("Failed to publish artwork for user {}: {}", user_id, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to publish the artwork".to_string(),
                )
            }
        })?;

    notify_best_effort(
        &state.db,
        user_id,
        "Artwork published",
        &format!("You published \"{}\" for Q{:.2}.", name, price),
    )
    .await;

    let public_url = state.storage.public_url_from_key(&key);
    Ok((
        StatusCode::CREATED,
        Json(PublishResponse {
            id,
            name,
            url_key: key,
            public_url,
            price,
        }),
    ))
}

// ---------------------------------------------------------------------------
// Purchase
// ---------------------------------------------------------------------------

/// POST /purchase - Execute the transactional purchase procedure. The
/// procedure validates, moves balances, transfers ownership and notifies;
/// business rejections surface as RAISE EXCEPTION and map to 409.
pub async fn purchase(
    State(state): State<AppState>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, (StatusCode, String)> {
    if request.buyer_id <= 0 || request.artwork_id <= 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "buyerId and artworkId are required".to_string(),
        ));
    }

    db::purchase(&state.db, request.buyer_id, request.artwork_id)
        .await
        .map_err(purchase_error)?;

    Ok(Json(PurchaseResponse {
        ok: true,
        artwork_id: request.artwork_id,
        buyer_id: request.buyer_id,
    }))
}

fn purchase_error(e: sqlx::Error) -> (StatusCode, String) {
    if let Some(db_err) = e.as_database_error() {
        match db_err.code().as_deref() {
            // raise_exception: business rule rejected the purchase
            Some("P0001") => return (StatusCode::CONFLICT, db_err.message().to_string()),
            // serialization_failure / deadlock_detected
            Some("40001") | Some("40P01") => {
                return (
                    StatusCode::CONFLICT,
                    "Concurrency conflict, try again".to_string(),
                )
            }
            _ => {}
        }
    }
    tracing::error!("Purchase failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Could not complete the purchase".to_string(),
    )
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_truncated_md5_hex() {
        // md5("hello") = 5d41402abc4b2a76b9719d911017c592
        assert_eq!(password_hash16("hello"), "5d41402abc4b2a76");
        assert_eq!(password_hash16("hello").len(), 16);
    }

    #[test]
    fn page_bounds_clamp_limit_and_offset() {
        let params = PageParams {
            limit: Some(500),
            offset: Some(-3),
        };
        assert_eq!(page_bounds(&params), (200, 0));

        let params = PageParams {
            limit: None,
            offset: None,
        };
        assert_eq!(page_bounds(&params), (100, 0));
    }
}
