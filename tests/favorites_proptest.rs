//! Property-based tests for the favorites bookkeeping

mod common;

use flixdesk::egui_app::SessionStore;
use proptest::prelude::*;

use common::sample_session;

fn store_with_favorites(favorites: Vec<String>) -> SessionStore {
    let store = SessionStore::in_memory();
    let mut session = sample_session();
    session.user.favorite_movies = favorites;
    store.set(session);
    store
}

proptest! {
    /// Adding then removing an id not previously present is observable
    /// and then fully undone, for any id.
    #[test]
    fn add_then_remove_round_trip(id in "[a-z0-9]{1,12}", existing in proptest::collection::vec("[A-Z]{1,8}", 0..8)) {
        let store = store_with_favorites(existing.clone());
        prop_assume!(!existing.contains(&id));

        store.add_favorite_locally(&id);
        prop_assert!(store.is_favorite(&id));

        store.remove_favorite_locally(&id);
        prop_assert!(!store.is_favorite(&id));
        prop_assert_eq!(store.user().unwrap().favorite_movies, existing);
    }

    /// Removing an absent id leaves the sequence unchanged.
    #[test]
    fn remove_absent_id_is_noop(id in "[a-z0-9]{1,12}", existing in proptest::collection::vec("[A-Z]{1,8}", 0..8)) {
        prop_assume!(!existing.contains(&id));
        let store = store_with_favorites(existing.clone());

        store.remove_favorite_locally(&id);
        prop_assert_eq!(store.user().unwrap().favorite_movies, existing);
    }

    /// Adding appends at the end and preserves the existing order.
    #[test]
    fn add_appends_preserving_order(id in "[a-z0-9]{1,12}", existing in proptest::collection::vec("[A-Z]{1,8}", 0..8)) {
        let store = store_with_favorites(existing.clone());

        store.add_favorite_locally(&id);
        let favorites = store.user().unwrap().favorite_movies;
        prop_assert_eq!(&favorites[..existing.len()], &existing[..]);
        prop_assert_eq!(favorites.last().map(String::as_str), Some(id.as_str()));
    }

    /// Removal splices only the first occurrence of a duplicated id.
    #[test]
    fn remove_splices_first_occurrence(id in "[a-z0-9]{1,12}") {
        let store = store_with_favorites(vec![id.clone(), id.clone()]);

        store.remove_favorite_locally(&id);
        prop_assert!(store.is_favorite(&id));
        prop_assert_eq!(store.user().unwrap().favorite_movies.len(), 1);
    }
}
