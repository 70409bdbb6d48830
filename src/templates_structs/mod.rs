// Template context structures for Askama templates.

use actix_session::Session;

use crate::config::AppConfig;
use crate::csrf;
use crate::session::take_flash;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session),
        }
    }
}

mod api;
mod dashboard;

pub use self::api::DashboardSnapshot;
pub use self::dashboard::DashboardTemplate;
