//! Shared fixtures for the integration tests

#![allow(dead_code)]

use flixdesk::egui_app::{ApiClient, Config, Session, SessionStore};
use flixdesk::shared::config::AppConfig;
use flixdesk::shared::models::UserProfile;

/// A profile matching the remote API's wire schema
pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: "u1".to_string(),
        username: "moviefan".to_string(),
        password: None,
        email: "fan@example.com".to_string(),
        birthday: chrono::NaiveDate::from_ymd_opt(1990, 4, 2),
        favorite_movies: vec!["m1".to_string(), "m2".to_string()],
    }
}

pub fn sample_session() -> Session {
    Session {
        user: sample_profile(),
        token: "tok".to_string(),
    }
}

/// An API client pointed at a test server with an injected store
pub fn client_for(base_url: &str, session: SessionStore) -> ApiClient {
    let config =
        Config::with_builder(AppConfig::builder().server_url(base_url.to_string())).unwrap();
    ApiClient::new(config, session)
}

/// A catalog entry in the remote wire format
pub fn movie_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "Title": title,
        "Description": format!("Synopsis of {}", title),
        "Genre": { "Name": "Drama", "Description": "Serious stories." },
        "Director": { "Name": "Jane Doe", "Bio": "Prolific director." },
        "ImagePath": format!("https://img.example/{}.png", id)
    })
}

/// The wire form of `sample_profile`
pub fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "u1",
        "Username": "moviefan",
        "Email": "fan@example.com",
        "Birthday": "1990-04-02",
        "FavoriteMovies": ["m1", "m2"]
    })
}
