pub mod dashboard;
pub mod member;
