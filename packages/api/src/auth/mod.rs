//! Authentication: password hashing and the session-backed login state.

mod password;
mod session;

pub use password::{hash_password, verify_password};
pub(crate) use password::{hash_password_blocking, verify_password_blocking};
pub use session::{
    current_user, flash, login, logout, signing_key, take_flashes, with_sessions, CurrentUser,
    Flash, FlashLevel, SESSION_LOGGED_IN_KEY, SESSION_USERNAME_KEY,
};
