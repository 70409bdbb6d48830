use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::errors::AppError;
use crate::views::{ViewId, new_view_id};

pub const SESSION_COOKIE: &str = "member_admin_session";

const VIEW_ID_KEY: &str = "view_id";
const FLASH_KEY: &str = "flash";

/// Cookie-backed session holding the CSRF token, view id and flash message.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// The dashboard view bound to this browser session, if any.
pub fn get_view_id(session: &Session) -> Option<ViewId> {
    session.get::<String>(VIEW_ID_KEY).unwrap_or(None)
}

pub fn get_or_create_view_id(session: &Session) -> Result<ViewId, AppError> {
    if let Some(id) = get_view_id(session) {
        return Ok(id);
    }
    let id = new_view_id();
    session.insert(VIEW_ID_KEY, &id)?;
    Ok(id)
}

/// Forget the current view id; the next page load mounts a fresh view.
pub fn clear_view_id(session: &Session) {
    session.remove(VIEW_ID_KEY);
}

pub fn set_flash(session: &Session, msg: &str) {
    let _ = session.insert(FLASH_KEY, msg);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
