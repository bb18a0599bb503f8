use contracts::system::auth::UserSession;
use leptos::prelude::*;

use super::storage;

/// Provide the read-only session to the component tree. The header is
/// the only consumer; it never writes back.
pub fn provide_session() {
    provide_context(storage::load_session());
}

pub fn use_session() -> UserSession {
    use_context::<UserSession>().expect("UserSession not provided in context")
}
