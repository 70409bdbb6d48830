use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::{CsrfOnly, redirect_to_dashboard};
use crate::config::AppConfig;
use crate::csrf;
use crate::errors::{AppError, render};
use crate::models::dashboard::DashboardState;
use crate::models::member::MemberSource;
use crate::session::{clear_view_id, get_or_create_view_id, get_view_id};
use crate::templates_structs::{DashboardTemplate, PageContext};
use crate::views::{LoadStatus, ViewRegistry, load_view};

/// Render the member table, mounting and loading the view on first visit.
pub async fn index<S: MemberSource + 'static>(
    registry: web::Data<ViewRegistry>,
    source: web::Data<S>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let view_id = get_or_create_view_id(&session)?;
    load_view(&registry, source.get_ref(), &view_id).await;

    let ctx = PageContext::build(&session, &config);
    let (view, status) = registry
        .inspect(&view_id, |v| (v.state.page_view(), v.status))
        .unwrap_or_else(|| (DashboardState::new().page_view(), LoadStatus::Pending));

    render(DashboardTemplate { ctx, view, status })
}

/// Unmount the current view and start over with a fresh fetch.
pub async fn reload(
    registry: web::Data<ViewRegistry>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if let Some(view_id) = get_view_id(&session) {
        registry.unmount(&view_id);
    }
    clear_view_id(&session);
    Ok(redirect_to_dashboard())
}
