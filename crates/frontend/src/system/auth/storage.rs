use contracts::system::auth::UserSession;

const USER_NAME_KEY: &str = "userName";
const USER_ID_KEY: &str = "userId";

fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Read the logged-in employee identity written at login time.
/// This subsystem only ever reads it.
pub fn load_session() -> UserSession {
    UserSession {
        user_id: get_item(USER_ID_KEY).and_then(|v| v.parse().ok()),
        user_name: get_item(USER_NAME_KEY),
    }
}
