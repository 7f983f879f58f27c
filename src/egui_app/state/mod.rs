use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::egui_app::api::ApiClient;
use crate::egui_app::config::Config;
use crate::egui_app::session::{Session, SessionStore};
use crate::shared::error::{ApiError, LOGIN_FAILURE};
use crate::shared::models::{
    AuthResponse, LoginCredentials, Movie, ProfileUpdate, RegistrationInput, UserProfile,
};

/// How long a snackbar notification stays visible
pub const SNACKBAR_DURATION: Duration = Duration::from_secs(2);

/// Current app view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Unauthenticated landing page with sign-in/sign-up dialogs
    Welcome,
    /// Movie catalog grid
    Movies,
    /// Profile display and edit form
    Profile,
}

/// Which modal dialog is open on the welcome view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeDialog {
    None,
    SignIn,
    Register,
}

/// Content of the movie detail dialog (genre, director, or synopsis)
#[derive(Debug, Clone)]
pub struct DetailDialog {
    pub title: String,
    pub content: String,
}

/// Transient snackbar notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub shown_at: Instant,
}

impl Notification {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= SNACKBAR_DURATION
    }
}

/// Sign-in dialog inputs
#[derive(Debug, Default)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

/// Registration dialog inputs
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub email: String,
    /// Optional, `YYYY-MM-DD`
    pub birthday: String,
}

/// Profile edit inputs
#[derive(Debug, Default)]
pub struct ProfileForm {
    pub username: String,
    /// Empty means "unchanged"
    pub password: String,
    pub email: String,
}

/// Central application state shared across egui views.
///
/// Network calls run on spawned worker threads; each in-flight
/// operation has one pending-result slot polled every frame. Dropping
/// a slot (logout, reset) discards any late result, so a detached
/// worker can never update disposed state.
pub struct AppState {
    pub api: ApiClient,
    pub current_view: AppView,
    pub movies: Vec<Movie>,
    /// Whether a catalog fetch has completed since the last login
    pub movies_loaded: bool,
    pub welcome_dialog: WelcomeDialog,
    pub detail_dialog: Option<DetailDialog>,
    pub signin_form: SignInForm,
    pub register_form: RegisterForm,
    pub profile_form: ProfileForm,
    /// Inline error shown inside the open dialog/form
    pub form_error: Option<String>,
    pub loading: bool,
    notification: Option<Notification>,
    login_result: Option<Receiver<Result<AuthResponse, ApiError>>>,
    register_result: Option<Receiver<Result<UserProfile, ApiError>>>,
    movies_result: Option<Receiver<Result<Vec<Movie>, ApiError>>>,
    favorite_result: Option<Receiver<(bool, Result<(), ApiError>)>>,
    profile_result: Option<Receiver<Result<UserProfile, ApiError>>>,
    delete_result: Option<Receiver<Result<(), ApiError>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_parts(Config::new(), SessionStore::load())
    }

    /// Build state from explicit parts; tests inject an in-memory store
    pub fn with_parts(config: Config, session: SessionStore) -> Self {
        let api = ApiClient::new(config, session);
        let current_view = if api.session().get().is_some() {
            AppView::Movies
        } else {
            AppView::Welcome
        };

        let mut state = Self {
            api,
            current_view,
            movies: Vec::new(),
            movies_loaded: false,
            welcome_dialog: WelcomeDialog::None,
            detail_dialog: None,
            signin_form: SignInForm::default(),
            register_form: RegisterForm::default(),
            profile_form: ProfileForm::default(),
            form_error: None,
            loading: false,
            notification: None,
            login_result: None,
            register_result: None,
            movies_result: None,
            favorite_result: None,
            profile_result: None,
            delete_result: None,
        };
        state.refresh_profile_form();
        state
    }

    pub fn session(&self) -> &SessionStore {
        self.api.session()
    }

    /// Show a transient snackbar
    pub fn notify(&mut self, text: impl Into<String>) {
        self.notification = Some(Notification::new(text));
    }

    /// The current snackbar text, pruning it once expired
    pub fn notification(&mut self) -> Option<&Notification> {
        if self
            .notification
            .as_ref()
            .map(|n| n.is_expired())
            .unwrap_or(false)
        {
            self.notification = None;
        }
        self.notification.as_ref()
    }

    /// Redirect guard: authenticated views fall back to the welcome
    /// view when no session is cached.
    pub fn enforce_session(&mut self) {
        if self.current_view != AppView::Welcome && self.session().get().is_none() {
            self.current_view = AppView::Welcome;
        }
    }

    /// Poll every pending-result slot; called once per frame.
    pub fn poll_results(&mut self) {
        self.poll_login();
        self.poll_register();
        self.poll_movies();
        self.poll_favorite();
        self.poll_profile();
        self.poll_delete();
    }

    fn poll_login(&mut self) {
        let Some(ref rx) = self.login_result else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };
        self.login_result = None;
        self.loading = false;

        match result {
            Ok(auth) => {
                tracing::info!("logged in as {}", auth.user.username);
                self.session().set(Session {
                    user: auth.user,
                    token: auth.token,
                });
                self.welcome_dialog = WelcomeDialog::None;
                self.signin_form = SignInForm::default();
                self.form_error = None;
                self.refresh_profile_form();
                self.current_view = AppView::Movies;
                self.notify("Logged in successfully");
            }
            Err(_) => {
                // Bad credentials and unreachable server collapse to the
                // same fixed phrase; the dialog stays open.
                self.form_error = Some(LOGIN_FAILURE.to_string());
            }
        }
    }

    fn poll_register(&mut self) {
        let Some(ref rx) = self.register_result else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };
        self.register_result = None;
        self.loading = false;

        match result {
            Ok(user) => {
                tracing::info!("registered user {}", user.username);
                self.welcome_dialog = WelcomeDialog::None;
                self.register_form = RegisterForm::default();
                self.form_error = None;
                self.notify("Signed up successfully");
            }
            Err(_) => {
                self.form_error = Some("Failed to sign up".to_string());
            }
        }
    }

    fn poll_movies(&mut self) {
        let Some(ref rx) = self.movies_result else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };
        self.movies_result = None;
        self.movies_loaded = true;

        match result {
            Ok(movies) => {
                self.movies = movies;
            }
            Err(e) => {
                // No partial data and no retry; the generic phrase is
                // all the user sees.
                let message = e.user_message().to_string();
                self.notify(message);
            }
        }
    }

    fn poll_favorite(&mut self) {
        let Some(ref rx) = self.favorite_result else {
            return;
        };
        let Ok((added, result)) = rx.try_recv() else {
            return;
        };
        self.favorite_result = None;

        match result {
            Ok(()) => {
                if added {
                    self.notify("Added to favorites");
                } else {
                    self.notify("Removed from favorites");
                }
            }
            Err(e) => {
                let message = e.user_message().to_string();
                self.notify(message);
            }
        }
    }

    fn poll_profile(&mut self) {
        let Some(ref rx) = self.profile_result else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };
        self.profile_result = None;
        self.loading = false;

        match result {
            Ok(user) => {
                self.session().set_user(user);
                self.refresh_profile_form();
                self.form_error = None;
                self.notify("User updated!");
            }
            Err(e) => {
                let message = e.user_message().to_string();
                self.notify(message);
            }
        }
    }

    fn poll_delete(&mut self) {
        let Some(ref rx) = self.delete_result else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };
        self.delete_result = None;
        self.loading = false;

        match result {
            Ok(()) => {
                // Clearing the session is the caller's job, not the
                // API layer's.
                self.session().clear();
                self.reset_to_welcome();
                self.notify("Account deleted");
            }
            Err(e) => {
                let message = e.user_message().to_string();
                self.notify(message);
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.signin_form.username.is_empty() || self.signin_form.password.is_empty() {
            self.form_error = Some("Username and password are required".to_string());
            return;
        }

        self.loading = true;
        self.form_error = None;

        let credentials = LoginCredentials {
            username: self.signin_form.username.clone(),
            password: self.signin_form.password.clone(),
        };
        let api = self.api.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.login(&credentials);
            let _ = tx.send(result);
        });

        self.login_result = Some(rx);
    }

    pub fn handle_register(&mut self) {
        if self.register_form.username.is_empty() {
            self.form_error = Some("Username is required".to_string());
            return;
        }

        if self.register_form.email.is_empty() || self.register_form.password.is_empty() {
            self.form_error = Some("Email and password are required".to_string());
            return;
        }

        // Simple email validation
        if !self.register_form.email.contains('@') || !self.register_form.email.contains('.') {
            self.form_error = Some("Please enter a valid email address".to_string());
            return;
        }

        let birthday = if self.register_form.birthday.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(&self.register_form.birthday, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    self.form_error =
                        Some("Birthday must be in YYYY-MM-DD format".to_string());
                    return;
                }
            }
        };

        self.loading = true;
        self.form_error = None;

        let input = RegistrationInput {
            username: self.register_form.username.clone(),
            password: self.register_form.password.clone(),
            email: self.register_form.email.clone(),
            birthday,
        };
        let api = self.api.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.register(&input);
            let _ = tx.send(result);
        });

        self.register_result = Some(rx);
    }

    /// Fetch the catalog unless one is already loaded or in flight
    pub fn load_movies(&mut self) {
        if self.movies_loaded || self.movies_result.is_some() {
            return;
        }

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.list_movies();
            let _ = tx.send(result);
        });

        self.movies_result = Some(rx);
    }

    /// Add or remove a favorite depending on the current cached state.
    ///
    /// The local favorites mutation happens inside the API layer before
    /// the network call, so the heart toggles immediately.
    pub fn toggle_favorite(&mut self, movie_id: &str) {
        let adding = !self.api.is_favorite(movie_id);
        let api = self.api.clone();
        let movie_id = movie_id.to_string();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = if adding {
                api.add_favorite(&movie_id)
            } else {
                api.remove_favorite(&movie_id)
            };
            let _ = tx.send((adding, result));
        });

        self.favorite_result = Some(rx);
    }

    /// Whether a favorites call is still in flight
    pub fn has_pending_favorite(&self) -> bool {
        self.favorite_result.is_some()
    }

    pub fn handle_update_profile(&mut self) {
        if self.profile_form.username.is_empty() || self.profile_form.email.is_empty() {
            self.form_error = Some("Username and email are required".to_string());
            return;
        }

        self.loading = true;
        self.form_error = None;

        let update = ProfileUpdate {
            username: self.profile_form.username.clone(),
            password: if self.profile_form.password.is_empty() {
                None
            } else {
                Some(self.profile_form.password.clone())
            },
            email: self.profile_form.email.clone(),
        };
        let api = self.api.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.edit_profile(&update);
            let _ = tx.send(result);
        });

        self.profile_result = Some(rx);
    }

    pub fn handle_delete_account(&mut self) {
        self.loading = true;

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.delete_profile();
            let _ = tx.send(result);
        });

        self.delete_result = Some(rx);
    }

    /// Log out: clear the session store and reset all view state.
    pub fn logout(&mut self) {
        self.session().clear();
        self.reset_to_welcome();
    }

    fn reset_to_welcome(&mut self) {
        self.current_view = AppView::Welcome;
        self.welcome_dialog = WelcomeDialog::None;
        self.detail_dialog = None;
        self.movies = Vec::new();
        self.movies_loaded = false;
        self.signin_form = SignInForm::default();
        self.register_form = RegisterForm::default();
        self.profile_form = ProfileForm::default();
        self.form_error = None;
        self.loading = false;
        // Dropping the slots cancels interest in any in-flight call.
        self.login_result = None;
        self.register_result = None;
        self.movies_result = None;
        self.favorite_result = None;
        self.profile_result = None;
        self.delete_result = None;
    }

    fn refresh_profile_form(&mut self) {
        if let Some(user) = self.session().user() {
            self.profile_form = ProfileForm {
                username: user.username,
                password: String::new(),
                email: user.email,
            };
        }
    }

    pub fn open_detail_dialog(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.detail_dialog = Some(DetailDialog {
            title: title.into(),
            content: content.into(),
        });
    }

    pub fn open_welcome_dialog(&mut self, dialog: WelcomeDialog) {
        self.welcome_dialog = dialog;
        self.form_error = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use crate::shared::models::UserProfile;

    fn test_state() -> AppState {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://127.0.0.1:9".to_string()),
        )
        .unwrap();
        AppState::with_parts(config, SessionStore::in_memory())
    }

    fn sample_session() -> Session {
        Session {
            user: UserProfile {
                id: "u1".to_string(),
                username: "moviefan".to_string(),
                password: None,
                email: "fan@example.com".to_string(),
                birthday: None,
                favorite_movies: vec![],
            },
            token: "tok".to_string(),
        }
    }

    #[test]
    fn test_starts_on_welcome_without_session() {
        let state = test_state();
        assert_eq!(state.current_view, AppView::Welcome);
    }

    #[test]
    fn test_starts_on_movies_with_session() {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://127.0.0.1:9".to_string()),
        )
        .unwrap();
        let store = SessionStore::in_memory();
        store.set(sample_session());
        let state = AppState::with_parts(config, store);

        assert_eq!(state.current_view, AppView::Movies);
        assert_eq!(state.profile_form.username, "moviefan");
        assert_eq!(state.profile_form.email, "fan@example.com");
        assert!(state.profile_form.password.is_empty());
    }

    #[test]
    fn test_login_requires_inputs() {
        let mut state = test_state();
        state.handle_login();
        assert_eq!(
            state.form_error.as_deref(),
            Some("Username and password are required")
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_register_validates_email() {
        let mut state = test_state();
        state.register_form.username = "user".to_string();
        state.register_form.password = "pass".to_string();
        state.register_form.email = "not-an-email".to_string();
        state.handle_register();
        assert_eq!(
            state.form_error.as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_register_validates_birthday_format() {
        let mut state = test_state();
        state.register_form.username = "user".to_string();
        state.register_form.password = "pass".to_string();
        state.register_form.email = "user@example.com".to_string();
        state.register_form.birthday = "01/02/1990".to_string();
        state.handle_register();
        assert_eq!(
            state.form_error.as_deref(),
            Some("Birthday must be in YYYY-MM-DD format")
        );
    }

    #[test]
    fn test_enforce_session_redirects() {
        let mut state = test_state();
        state.current_view = AppView::Movies;
        state.enforce_session();
        assert_eq!(state.current_view, AppView::Welcome);
    }

    #[test]
    fn test_logout_clears_session_and_state() {
        let mut state = test_state();
        state.session().set(sample_session());
        state.current_view = AppView::Profile;
        state.movies = vec![];
        state.logout();

        assert!(state.session().get().is_none());
        assert_eq!(state.current_view, AppView::Welcome);
    }

    #[test]
    fn test_notification_expires() {
        let mut state = test_state();
        state.notify("hello");
        assert_eq!(state.notification().map(|n| n.text.as_str()), Some("hello"));

        // Backdate past the snackbar lifetime
        if let Some(past) = Instant::now().checked_sub(SNACKBAR_DURATION + Duration::from_millis(1))
        {
            state.notification = Some(Notification {
                text: "old".to_string(),
                shown_at: past,
            });
            assert!(state.notification().is_none());
        }
    }

    #[test]
    fn test_open_welcome_dialog_clears_form_error() {
        let mut state = test_state();
        state.form_error = Some("stale".to_string());
        state.open_welcome_dialog(WelcomeDialog::SignIn);
        assert!(state.form_error.is_none());
        assert_eq!(state.welcome_dialog, WelcomeDialog::SignIn);
    }
}
