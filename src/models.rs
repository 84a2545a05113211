use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Upload folder for profile photos.
pub const PROFILE_PHOTO_FOLDER: &str = "Fotos_Perfil";
/// Upload folder for published artwork images.
pub const ARTWORK_FOLDER: &str = "Fotos_Publicadas";

// ---------------------------------------------------------------------------
// Database rows (stored-routine result sets)
// ---------------------------------------------------------------------------

/// Row returned by `sp_auth_login` and `sp_user_create`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub balance: Decimal,
}

/// Row returned by `sp_get_user_profile`. `photo_url` holds the storage
/// KEY, not a derived URL.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub balance: Decimal,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notification {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Row returned by `sp_artworks_list`. `url` is the stored key.
#[derive(Debug, Clone, FromRow)]
pub struct ArtworkListRow {
    pub id: i32,
    pub name: String,
    pub image_name: Option<String>,
    pub url: String,
    pub price: Decimal,
    pub is_available: bool,
    pub seller_id: i32,
    pub seller: String,
}

/// Row returned by `sp_artworks_created`.
#[derive(Debug, Clone, FromRow)]
pub struct CreatedArtworkRow {
    pub id: i32,
    pub name: String,
    pub image_name: Option<String>,
    pub url: String,
    pub price: Decimal,
    pub is_available: bool,
    pub acquisition_type: String,
    pub original_owner_id: i32,
    pub original_owner_full_name: String,
    pub current_owner_id: i32,
    pub current_owner_full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row returned by `sp_artworks_mine`.
#[derive(Debug, Clone, FromRow)]
pub struct OwnedArtworkRow {
    pub id: i32,
    pub name: String,
    pub image_name: Option<String>,
    pub url: String,
    pub price: Decimal,
    pub is_available: bool,
    pub acquisition_type: String,
    pub original_owner_id: i32,
    pub original_owner_full_name: String,
}

/// Status reported by profile-mutating routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    Ok,
    NoChanges,
    NotFound,
    InvalidPassword,
    UsernameDup,
    Other(String),
}

impl From<&str> for UpdateStatus {
    fn from(s: &str) -> Self {
        match s {
            "OK" => UpdateStatus::Ok,
            "NO_CHANGES" => UpdateStatus::NoChanges,
            "NOT_FOUND" => UpdateStatus::NotFound,
            "INVALID_PASSWORD" => UpdateStatus::InvalidPassword,
            "USERNAME_DUP" => UpdateStatus::UsernameDup,
            other => UpdateStatus::Other(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub new_password: Option<String>,
    pub current_password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BalanceRequest {
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    #[serde(rename = "buyerId")]
    pub buyer_id: i32,
    #[serde(rename = "artworkId")]
    pub artwork_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct OwnerParams {
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub ok: bool,
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub ok: bool,
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub ok: bool,
    pub photo_key: String,
    pub public_url: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArtworkItem {
    pub id: i32,
    pub name: String,
    pub image_name: Option<String>,
    pub url_key: String,
    pub price: Decimal,
    pub is_available: bool,
    pub seller_id: i32,
    pub seller: String,
    pub public_url: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedArtworkItem {
    pub id: i32,
    pub name: String,
    pub image_name: Option<String>,
    pub url_key: String,
    pub public_url: String,
    pub price: Decimal,
    pub is_available: bool,
    pub acquisition_type: String,
    pub original_owner_id: i32,
    pub original_owner_full_name: String,
    pub current_owner_id: i32,
    pub current_owner_full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inventory entry: an authored or purchased piece.
#[derive(Debug, Serialize)]
pub struct OwnedArtworkItem {
    pub id: i32,
    pub name: String,
    pub image_name: Option<String>,
    pub url_key: String,
    pub price: Decimal,
    pub is_available: bool,
    pub acquisition_type: String,
    pub seller_id: i32,
    pub seller: String,
    pub public_url: String,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub id: i32,
    pub name: String,
    pub url_key: String,
    pub public_url: String,
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub ok: bool,
    #[serde(rename = "artworkId")]
    pub artwork_id: i32,
    #[serde(rename = "buyerId")]
    pub buyer_id: i32,
}
