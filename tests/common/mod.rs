//! Shared test infrastructure for dashboard integration tests.
//!
//! - `sample_members(n)` - deterministic member records "User 1".."User n"
//! - `test_app!([SourceType,] source, registry)` - the full route table behind a session
//! - `CookieJar` - carries the session cookie between requests
//! - `extract_csrf_token(html)` - pulls the form token out of a page

#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::ContentType;
use actix_web::test::TestRequest;
use regex::Regex;

use member_admin::models::member::Member;
use member_admin::session::SESSION_COOKIE;

// ============================================================================
// FIXTURES
// ============================================================================

pub fn sample_members(n: usize) -> Vec<Member> {
    (1..=n)
        .map(|i| {
            Member::new(
                i.to_string().as_str(),
                &format!("User {i}"),
                &format!("user{i}@mailinator.com"),
                if i == 1 { "admin" } else { "member" },
            )
        })
        .collect()
}

pub const MEMBERS_JSON: &str = r#"[
  {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
  {"id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "member"},
  {"id": "3", "name": "Arvind Kumar", "email": "arvind@mailinator.com", "role": "admin"},
  {"id": "4", "name": "Joanna Ann", "email": "joanna@mailinator.com", "role": "member"}
]"#;

// ============================================================================
// APP SETUP
// ============================================================================

/// Build a test service for the whole app backed by `$source`.
#[allow(unused_macros)]
macro_rules! test_app {
    ($source:expr, $registry:expr) => {
        test_app!(member_admin::models::member::StaticMemberSource, $source, $registry)
    };
    ($source_ty:ty, $source:expr, $registry:expr) => {{
        let config = member_admin::config::AppConfig::default();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(member_admin::session::session_middleware(
                    actix_web::cookie::Key::generate(),
                ))
                .app_data(actix_web::web::Data::new(config))
                .app_data(actix_web::web::Data::new($source))
                .app_data(actix_web::web::Data::new($registry.clone()))
                .configure(member_admin::handlers::configure::<$source_ty>),
        )
        .await
    }};
}

// ============================================================================
// SESSION COOKIE
// ============================================================================

#[derive(Default)]
pub struct CookieJar(Option<Cookie<'static>>);

impl CookieJar {
    pub fn apply(&self, req: TestRequest) -> TestRequest {
        match &self.0 {
            Some(c) => req.cookie(c.clone()),
            None => req,
        }
    }

    pub fn store<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(c) = resp.response().cookies().find(|c| c.name() == SESSION_COOKIE) {
            self.0 = Some(c.into_owned());
        }
    }
}

/// A urlencoded POST request with the given fields.
pub fn form_post(uri: &str, fields: &[(&str, &str)]) -> TestRequest {
    let body = serde_urlencoded::to_string(fields).expect("encode form");
    TestRequest::post()
        .uri(uri)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(body)
}

// ============================================================================
// CSRF TOKEN EXTRACTION
// ============================================================================

pub fn extract_csrf_token(html: &str) -> String {
    // <input type="hidden" name="csrf_token" value="...">
    let re = Regex::new(r#"name="csrf_token"\s+value="([^"]+)""#)
        .expect("Failed to compile regex");

    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| {
            eprintln!("CSRF token not found in HTML");
            "invalid_token".to_string()
        })
}
