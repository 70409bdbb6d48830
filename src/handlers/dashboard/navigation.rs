use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::{mutate_view, redirect_to_dashboard};
use crate::csrf;
use crate::errors::AppError;
use crate::views::ViewRegistry;

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
    pub csrf_token: String,
}

/// Search box + button: set the filter text and pull the page into range.
pub async fn search(
    registry: web::Data<ViewRegistry>,
    session: Session,
    form: web::Form<SearchForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    mutate_view(&registry, &session, |state| {
        state.set_search(&form.q);
        state.apply_search();
        Ok(())
    })?;
    Ok(redirect_to_dashboard())
}

/// Pagination controls. `nav` wins over `page` when both are sent.
#[derive(Deserialize)]
pub struct PageForm {
    pub nav: Option<String>,
    pub page: Option<String>,
    pub csrf_token: String,
}

enum PageMove {
    First,
    Previous,
    Next,
    Last,
    To(usize),
    Stay,
}

impl PageForm {
    fn to_move(&self) -> Result<PageMove, AppError> {
        match self.nav.as_deref() {
            Some("first") => Ok(PageMove::First),
            Some("previous") => Ok(PageMove::Previous),
            Some("next") => Ok(PageMove::Next),
            Some("last") => Ok(PageMove::Last),
            Some(other) => Err(AppError::BadRequest(format!("Unknown page action '{other}'"))),
            None => {
                let raw = self.page.as_deref().unwrap_or("").trim();
                if raw.is_empty() {
                    return Ok(PageMove::Stay);
                }
                raw.parse::<usize>()
                    .map(PageMove::To)
                    .map_err(|_| AppError::BadRequest(format!("Invalid page number '{raw}'")))
            }
        }
    }
}

pub async fn page(
    registry: web::Data<ViewRegistry>,
    session: Session,
    form: web::Form<PageForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let movement = form.to_move()?;

    mutate_view(&registry, &session, |state| {
        match movement {
            PageMove::First => state.first_page(),
            PageMove::Previous => state.previous_page(),
            PageMove::Next => state.next_page(),
            PageMove::Last => state.last_page(),
            PageMove::To(n) => state.go_to_page(n),
            PageMove::Stay => {}
        }
        Ok(())
    })?;
    Ok(redirect_to_dashboard())
}
