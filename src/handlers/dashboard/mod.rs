pub mod list;
pub mod navigation;
pub mod rows;
pub mod selection;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::dashboard::DashboardState;
use crate::session::get_view_id;
use crate::views::ViewRegistry;

pub use self::list::{index, reload};
pub use self::navigation::{page, search, PageForm, SearchForm};
pub use self::rows::{delete, delete_selected, save, toggle_edit};
pub use self::selection::{select_all, select_row};

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub(crate) fn redirect_to_dashboard() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

/// Run a mutation against the session's view, then redirect back to the
/// table. Sessions without a live view are sent to `/dashboard`, which
/// mounts one.
pub(crate) fn mutate_view<R>(
    registry: &web::Data<ViewRegistry>,
    session: &Session,
    f: impl FnOnce(&mut DashboardState) -> Result<R, AppError>,
) -> Result<Option<R>, AppError> {
    let Some(view_id) = get_view_id(session) else {
        return Ok(None);
    };
    registry.with_view(&view_id, f).transpose()
}
