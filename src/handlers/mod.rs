pub mod api_v1;
pub mod dashboard;

use actix_web::{HttpResponse, web};

use crate::models::member::MemberSource;

/// All application routes. Generic over the member source so tests can
/// mount the app against an in-memory feed.
pub fn configure<S: MemberSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        // Root redirect
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish()
        }))
        .route("/dashboard", web::get().to(dashboard::index::<S>))
        .route("/dashboard/search", web::post().to(dashboard::search))
        .route("/dashboard/page", web::post().to(dashboard::page))
        .route("/dashboard/select-all", web::post().to(dashboard::select_all))
        .route("/dashboard/delete-selected", web::post().to(dashboard::delete_selected))
        .route("/dashboard/reload", web::post().to(dashboard::reload))
        .route("/dashboard/rows/{id}/select", web::post().to(dashboard::select_row))
        .route("/dashboard/rows/{id}/edit", web::post().to(dashboard::toggle_edit))
        .route("/dashboard/rows/{id}/save", web::post().to(dashboard::save))
        .route("/dashboard/rows/{id}/delete", web::post().to(dashboard::delete))
        .service(web::scope("/api/v1").configure(api_v1::configure::<S>));
}
