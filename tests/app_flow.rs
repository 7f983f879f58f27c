//! App-level flow tests: form handlers spawn worker threads whose
//! results are polled the way the frame loop does it.

mod common;

use std::time::Duration;

use flixdesk::egui_app::state::WelcomeDialog;
use flixdesk::egui_app::{AppState, AppView, Config, SessionStore};
use flixdesk::shared::config::AppConfig;
use flixdesk::shared::error::{GENERIC_FAILURE, LOGIN_FAILURE};
use mockito::Matcher;

use common::{movie_json, profile_json, sample_session};

fn state_for(base_url: &str, session: SessionStore) -> AppState {
    let config =
        Config::with_builder(AppConfig::builder().server_url(base_url.to_string())).unwrap();
    AppState::with_parts(config, session)
}

/// Poll results the way the frame loop does, until the predicate holds
/// or a generous timeout passes.
fn pump_until(state: &mut AppState, pred: impl Fn(&AppState) -> bool) {
    for _ in 0..500 {
        state.poll_results();
        if pred(state) {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("worker result never arrived");
}

#[test]
fn successful_login_stores_session_and_navigates() {
    let mut server = mockito::Server::new();
    let body = serde_json::json!({ "user": profile_json(), "token": "fresh-token" });
    let _mock = server
        .mock("POST", "/login")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create();

    let mut state = state_for(&server.url(), SessionStore::in_memory());
    state.open_welcome_dialog(WelcomeDialog::SignIn);
    state.signin_form.username = "moviefan".to_string();
    state.signin_form.password = "hunter2".to_string();
    state.handle_login();

    pump_until(&mut state, |s| !s.loading);

    let session = state.session().get().expect("session written");
    assert_eq!(session.token, "fresh-token");
    assert_eq!(session.user.username, "moviefan");
    assert_eq!(state.current_view, AppView::Movies);
    assert_eq!(state.welcome_dialog, WelcomeDialog::None);
    assert_eq!(
        state.notification().map(|n| n.text.clone()),
        Some("Logged in successfully".to_string())
    );
}

#[test]
fn failed_login_writes_nothing_and_stays_put() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/login")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("bad credentials")
        .create();

    let mut state = state_for(&server.url(), SessionStore::in_memory());
    state.open_welcome_dialog(WelcomeDialog::SignIn);
    state.signin_form.username = "moviefan".to_string();
    state.signin_form.password = "wrong".to_string();
    state.handle_login();

    pump_until(&mut state, |s| !s.loading);

    assert!(state.session().get().is_none());
    assert_eq!(state.current_view, AppView::Welcome);
    // Dialog stays open with the fixed failure phrase.
    assert_eq!(state.welcome_dialog, WelcomeDialog::SignIn);
    assert_eq!(state.form_error.as_deref(), Some(LOGIN_FAILURE));
}

#[test]
fn successful_registration_closes_dialog() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/users")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "_id": "u2",
                "Username": "newuser",
                "Email": "new@example.com",
                "FavoriteMovies": []
            })
            .to_string(),
        )
        .create();

    let mut state = state_for(&server.url(), SessionStore::in_memory());
    state.open_welcome_dialog(WelcomeDialog::Register);
    state.register_form.username = "newuser".to_string();
    state.register_form.password = "hunter2".to_string();
    state.register_form.email = "new@example.com".to_string();
    state.handle_register();

    pump_until(&mut state, |s| !s.loading);

    assert_eq!(state.welcome_dialog, WelcomeDialog::None);
    assert!(state.session().get().is_none());
    assert_eq!(
        state.notification().map(|n| n.text.clone()),
        Some("Signed up successfully".to_string())
    );
}

#[test]
fn rejected_registration_leaves_dialog_open() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/users")
        .with_status(400)
        .with_body("username taken")
        .create();

    let mut state = state_for(&server.url(), SessionStore::in_memory());
    state.open_welcome_dialog(WelcomeDialog::Register);
    state.register_form.username = "newuser".to_string();
    state.register_form.password = "hunter2".to_string();
    state.register_form.email = "new@example.com".to_string();
    state.handle_register();

    pump_until(&mut state, |s| !s.loading);

    assert_eq!(state.welcome_dialog, WelcomeDialog::Register);
    assert_eq!(state.form_error.as_deref(), Some("Failed to sign up"));
}

#[test]
fn catalog_failure_surfaces_generic_phrase_and_no_partial_data() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/movies")
        .with_status(500)
        .with_body("boom")
        .create();

    let session = SessionStore::in_memory();
    session.set(sample_session());
    let mut state = state_for(&server.url(), session);
    state.load_movies();

    pump_until(&mut state, |s| s.movies_loaded);

    assert!(state.movies.is_empty());
    assert_eq!(
        state.notification().map(|n| n.text.clone()),
        Some(GENERIC_FAILURE.to_string())
    );
}

#[test]
fn catalog_success_populates_movie_list() {
    let mut server = mockito::Server::new();
    let body = serde_json::json!([movie_json("m1", "Alien"), movie_json("m2", "Arrival")]);
    let _mock = server
        .mock("GET", "/movies")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create();

    let session = SessionStore::in_memory();
    session.set(sample_session());
    let mut state = state_for(&server.url(), session);
    state.load_movies();

    pump_until(&mut state, |s| s.movies_loaded);
    assert_eq!(state.movies.len(), 2);
    assert_eq!(state.movies[0].title, "Alien");
}

#[test]
fn toggle_favorite_round_trip() {
    let mut server = mockito::Server::new();
    let add = server
        .mock("POST", "/users/moviefan/movies/m9")
        .with_status(200)
        .with_body("added")
        .create();
    let remove = server
        .mock("DELETE", "/users/moviefan/movies/m9")
        .with_status(200)
        .with_body("removed")
        .create();

    let session = SessionStore::in_memory();
    session.set(sample_session());
    let mut state = state_for(&server.url(), session.clone());

    state.toggle_favorite("m9");
    pump_until(&mut state, |s| s.api.is_favorite("m9"));
    pump_until(&mut state, |s| !s.has_pending_favorite());
    assert_eq!(
        state.notification().map(|n| n.text.clone()),
        Some("Added to favorites".to_string())
    );

    state.toggle_favorite("m9");
    pump_until(&mut state, |s| !s.api.is_favorite("m9"));
    pump_until(&mut state, |s| !s.has_pending_favorite());
    assert_eq!(
        state.notification().map(|n| n.text.clone()),
        Some("Removed from favorites".to_string())
    );

    add.assert();
    remove.assert();
}

#[test]
fn delete_account_clears_session_and_returns_to_welcome() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("DELETE", "/users/moviefan")
        .with_status(200)
        .with_body("deleted")
        .create();

    let session = SessionStore::in_memory();
    session.set(sample_session());
    let mut state = state_for(&server.url(), session.clone());
    state.current_view = AppView::Profile;
    state.handle_delete_account();

    pump_until(&mut state, |s| !s.loading);

    assert!(session.get().is_none());
    assert_eq!(state.current_view, AppView::Welcome);
}

#[test]
fn profile_update_replaces_cached_profile() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("PUT", "/users/u1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "_id": "u1",
                "Username": "renamed",
                "Email": "renamed@example.com",
                "FavoriteMovies": ["m1", "m2"]
            })
            .to_string(),
        )
        .create();

    let session = SessionStore::in_memory();
    session.set(sample_session());
    let mut state = state_for(&server.url(), session.clone());
    state.current_view = AppView::Profile;
    state.profile_form.username = "renamed".to_string();
    state.profile_form.email = "renamed@example.com".to_string();
    state.handle_update_profile();

    pump_until(&mut state, |s| !s.loading);

    // The state stores the returned profile wholesale; the token stays.
    let cached = session.get().unwrap();
    assert_eq!(cached.user.username, "renamed");
    assert_eq!(cached.token, "tok");
    assert_eq!(
        state.notification().map(|n| n.text.clone()),
        Some("User updated!".to_string())
    );
}
