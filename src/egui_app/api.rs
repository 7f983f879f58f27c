//! API Access Layer
//!
//! Translates the app's logical operations into HTTP requests against
//! the remote movie API and presents callers with a uniform
//! result/error contract.
//!
//! Every authorized operation reads the bearer token from the session
//! store at call time, so a token refreshed mid-session is honored by
//! the next call. Failures are logged with distinguishing detail here
//! and returned as a structured [`ApiError`]; the UI collapses them to
//! one generic phrase.
//!
//! Calls made without a cached token are not rejected locally: the
//! request goes out without an Authorization header and the remote
//! rejection surfaces like any other failure.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::egui_app::session::SessionStore;
use crate::shared::error::ApiError;
use crate::shared::models::{
    AuthResponse, LoginCredentials, Movie, ProfileUpdate, RegistrationInput, UserProfile,
};

/// HTTP client for the remote movie API.
///
/// Cheap to clone; worker threads carry a clone and share the injected
/// session store with the UI thread.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    session: SessionStore,
    http: Client,
}

impl ApiClient {
    pub fn new(config: Config, session: SessionStore) -> Self {
        Self {
            config,
            session,
            http: Client::new(),
        }
    }

    /// The injected session store
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Register a new user. No auth header (pre-authentication).
    pub fn register(&self, input: &RegistrationInput) -> Result<UserProfile, ApiError> {
        let request = self.http.post(self.config.api_url("/users")).json(input);
        self.execute(request, "register")
    }

    /// Authenticate. Credentials are encoded as URL query parameters
    /// against the login endpoint, not as a request body. The session
    /// store is not written here; the caller decides what to keep.
    pub fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        let request = self
            .http
            .post(self.config.api_url("/login"))
            .query(credentials);
        self.execute(request, "login")
    }

    /// Fetch the full movie catalog
    pub fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let request = self.authorized(Method::GET, "/movies".to_string());
        self.execute(request, "list movies")
    }

    /// Fetch a single movie by title
    pub fn get_movie(&self, title: &str) -> Result<Movie, ApiError> {
        let request = self.authorized(Method::GET, format!("/movies/{}", title));
        self.execute(request, "get movie")
    }

    /// Fetch the movies by a given director
    pub fn movies_by_director(&self, name: &str) -> Result<Vec<Movie>, ApiError> {
        let request = self.authorized(Method::GET, format!("/movies/director/{}", name));
        self.execute(request, "movies by director")
    }

    /// Fetch the movies in a given genre
    pub fn movies_by_genre(&self, name: &str) -> Result<Vec<Movie>, ApiError> {
        let request = self.authorized(Method::GET, format!("/movies/genre/{}", name));
        self.execute(request, "movies by genre")
    }

    /// Mark a movie as a favorite.
    ///
    /// Derives the username from the cached profile and appends the id
    /// to the cached favorites before the network call, so the local
    /// sequence is updated independent of the network outcome.
    pub fn add_favorite(&self, movie_id: &str) -> Result<(), ApiError> {
        let username = self.cached_username()?;
        self.session.add_favorite_locally(movie_id);
        let request =
            self.authorized(Method::POST, format!("/users/{}/movies/{}", username, movie_id));
        self.execute_no_body(request, "add favorite")
    }

    /// Remove a movie from the favorites.
    ///
    /// Splices the first occurrence out of the cached favorites before
    /// the network call, mirroring [`ApiClient::add_favorite`].
    pub fn remove_favorite(&self, movie_id: &str) -> Result<(), ApiError> {
        let username = self.cached_username()?;
        self.session.remove_favorite_locally(movie_id);
        let request = self.authorized(
            Method::DELETE,
            format!("/users/{}/movies/{}", username, movie_id),
        );
        self.execute_no_body(request, "remove favorite")
    }

    /// Update the profile. The id comes from the cached profile; the
    /// caller is responsible for storing the returned profile back into
    /// the session.
    pub fn edit_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let user = self
            .session
            .user()
            .ok_or_else(|| ApiError::session("no cached profile for profile update"))?;
        let request = self
            .authorized(Method::PUT, format!("/users/{}", user.id))
            .json(update);
        self.execute(request, "edit profile")
    }

    /// Delete the account. The caller is responsible for clearing the
    /// session store afterwards.
    pub fn delete_profile(&self) -> Result<(), ApiError> {
        let username = self.cached_username()?;
        let request = self.authorized(Method::DELETE, format!("/users/{}", username));
        self.execute_no_body(request, "delete profile")
    }

    /// Fetch a user profile by id
    pub fn get_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        let request = self.authorized(Method::GET, format!("/users/{}", user_id));
        self.execute(request, "get user")
    }

    /// Fetch just the favorites sequence of a user
    pub fn get_favorites(&self, user_id: &str) -> Result<Vec<String>, ApiError> {
        self.get_user(user_id).map(|user| user.favorite_movies)
    }

    /// Pure local predicate: whether the cached profile lists the movie
    /// as a favorite. No network call.
    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.session.is_favorite(movie_id)
    }

    fn cached_username(&self) -> Result<String, ApiError> {
        self.session
            .user()
            .map(|user| user.username)
            .ok_or_else(|| ApiError::session("no cached profile for favorites/account request"))
    }

    /// Build a request with the bearer token read from the session at
    /// call time. Without a token the request goes out unauthenticated.
    fn authorized(&self, method: Method, path: String) -> RequestBuilder {
        let mut request = self.http.request(method, self.config.api_url(&path));
        if let Some(token) = self.session.token() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        request
    }

    fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, ApiError> {
        let rt = Runtime::new()
            .map_err(|e| ApiError::network(format!("failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let response = request.send().await.map_err(|e| {
                tracing::error!("{} failed before a response arrived: {}", context, e);
                ApiError::from(e)
            })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_else(|_| status.to_string());
                tracing::error!("{} rejected: status {}, body: {}", context, status, body);
                return Err(ApiError::remote(status.as_u16(), body));
            }

            response.json::<T>().await.map_err(|e| {
                tracing::error!("{} returned an unexpected body: {}", context, e);
                ApiError::decode(e.to_string())
            })
        })
    }

    /// Like `execute` but only checks the status; some endpoints answer
    /// with plain text the caller has no use for.
    fn execute_no_body(&self, request: RequestBuilder, context: &str) -> Result<(), ApiError> {
        let rt = Runtime::new()
            .map_err(|e| ApiError::network(format!("failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let response = request.send().await.map_err(|e| {
                tracing::error!("{} failed before a response arrived: {}", context, e);
                ApiError::from(e)
            })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_else(|_| status.to_string());
                tracing::error!("{} rejected: status {}, body: {}", context, status, body);
                return Err(ApiError::remote(status.as_u16(), body));
            }

            Ok(())
        })
    }
}
