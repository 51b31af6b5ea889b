//! Session snapshot stored by the login page in `localStorage`.

use eventbook_domain::id::UserId;
use eventbook_domain::session::Session;
use leptos::prelude::*;

const TOKEN_KEY: &str = "token";
const USER_ID_KEY: &str = "userId";

fn read(storage: &web_sys::Storage, key: &str) -> Option<String> {
    storage
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

/// Read the session from browser storage. Missing storage means anonymous.
pub fn load() -> Session {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return Session::anonymous();
    };
    Session {
        token: read(&storage, TOKEN_KEY),
        user_id: read(&storage, USER_ID_KEY).map(UserId::new),
    }
}

/// Session provided by [`crate::App`]; anonymous outside of it.
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_default()
}
