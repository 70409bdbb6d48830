use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::{CsrfOnly, mutate_view, redirect_to_dashboard};
use crate::csrf;
use crate::errors::AppError;
use crate::models::member::MemberId;
use crate::views::ViewRegistry;

/// Header checkbox.
pub async fn select_all(
    registry: web::Data<ViewRegistry>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    mutate_view(&registry, &session, |state| {
        state.toggle_select_all();
        Ok(())
    })?;
    Ok(redirect_to_dashboard())
}

/// Row checkbox.
pub async fn select_row(
    registry: web::Data<ViewRegistry>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = MemberId::from(path.into_inner());

    mutate_view(&registry, &session, |state| {
        if state.toggle_select(&id) { Ok(()) } else { Err(AppError::NotFound) }
    })?;
    Ok(redirect_to_dashboard())
}
