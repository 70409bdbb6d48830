use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::models::member::MemberSource;
use crate::session::get_or_create_view_id;
use crate::templates_structs::DashboardSnapshot;
use crate::views::{ViewRegistry, load_view};

/// GET /api/v1/dashboard: the session's current page as JSON.
pub async fn dashboard<S: MemberSource + 'static>(
    registry: web::Data<ViewRegistry>,
    source: web::Data<S>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let view_id = get_or_create_view_id(&session)?;
    load_view(&registry, source.get_ref(), &view_id).await;

    let snapshot = registry
        .inspect(&view_id, |v| DashboardSnapshot::from(v))
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// Configure API v1 routes.
pub fn configure<S: MemberSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(dashboard::<S>));
}
