use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::{CsrfOnly, mutate_view, redirect_to_dashboard};
use crate::csrf;
use crate::errors::AppError;
use crate::models::member::{MemberEditForm, MemberId};
use crate::session::set_flash;
use crate::views::ViewRegistry;

/// Edit button: switch the row into (or out of) inline editing.
pub async fn toggle_edit(
    registry: web::Data<ViewRegistry>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = MemberId::from(path.into_inner());

    mutate_view(&registry, &session, |state| {
        if state.toggle_edit(&id) { Ok(()) } else { Err(AppError::NotFound) }
    })?;
    Ok(redirect_to_dashboard())
}

/// Save button: write the submitted inputs into the draft and commit it.
pub async fn save(
    registry: web::Data<ViewRegistry>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<MemberEditForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = MemberId::from(path.into_inner());

    let saved = mutate_view(&registry, &session, |state| {
        if !state.contains(&id) {
            return Err(AppError::NotFound);
        }
        if !state.update_draft(&id, form.name.trim(), form.email.trim(), form.role.trim()) {
            // Row was not in edit mode (e.g. a stale tab); nothing to commit.
            return Ok(None);
        }
        state.save_edit(&id);
        Ok(state.member(&id).map(|m| m.name.clone()))
    })?;

    if let Some(Some(name)) = saved {
        set_flash(&session, &format!("Saved changes to '{name}'"));
    }
    Ok(redirect_to_dashboard())
}

/// Row Delete button.
pub async fn delete(
    registry: web::Data<ViewRegistry>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = MemberId::from(path.into_inner());

    let deleted = mutate_view(&registry, &session, |state| {
        let name = state.member(&id).map(|m| m.name.clone()).ok_or(AppError::NotFound)?;
        state.delete(&id);
        Ok(name)
    })?;

    if let Some(name) = deleted {
        set_flash(&session, &format!("Deleted member '{name}'"));
    }
    Ok(redirect_to_dashboard())
}

/// Delete Selected button.
pub async fn delete_selected(
    registry: web::Data<ViewRegistry>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let count = mutate_view(&registry, &session, |state| Ok(state.delete_selected()))?;

    let msg = match count {
        None | Some(0) => "No members selected".to_string(),
        Some(n) => format!("Deleted {} member{}", n, if n == 1 { "" } else { "s" }),
    };
    set_flash(&session, &msg);
    Ok(redirect_to_dashboard())
}
