//! Typed API Payloads
//!
//! Defines the request and response shapes exchanged with the remote
//! movie API. The remote schema uses PascalCase field names and `_id`
//! for identifiers, so every type carries serde renames to match the
//! wire format exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A movie genre as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Genre {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A movie director as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Director {
    pub name: String,
    #[serde(default)]
    pub bio: String,
}

/// A movie from the remote catalog.
///
/// Read-only from the client's perspective; held in memory only for the
/// current view, never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub genre: Genre,
    pub director: Director,
    #[serde(default)]
    pub image_path: String,
}

/// The cached user profile.
///
/// Created server-side on registration, cached in the session store,
/// mutated locally by favorite add/remove, and replaced wholesale on
/// profile edit. The password is write-only: it is sent on registration
/// and profile updates but never rendered, and the remote API does not
/// echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub favorite_movies: Vec<String>,
}

/// Successful login payload: the profile plus an opaque bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub token: String,
}

/// Login form input, encoded as URL query parameters against `/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Registration form input, sent as the `POST /users` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistrationInput {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

/// Profile edit input, sent as the `PUT /users/{id}` body.
///
/// An empty password means "unchanged" and is omitted from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileUpdate {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub email: String,
}
