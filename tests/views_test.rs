//! View registry tests: mount/unmount lifecycle and the guard that keeps a
//! late member load from touching a view that is gone.

mod common;

use std::time::Duration;

use member_admin::models::member::{FetchError, Member, MemberSource, StaticMemberSource};
use member_admin::views::{LoadStatus, ViewRegistry, load_view, new_view_id, spawn_view_sweeper};

use common::sample_members;

struct FailingSource;

impl MemberSource for FailingSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError> {
        Err(FetchError::Status(500))
    }
}

#[test]
fn test_view_ids_are_random_hex() {
    let a = new_view_id();
    let b = new_view_id();
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn test_mount_issues_ticket_once() {
    let registry = ViewRegistry::new();
    assert!(registry.mount("v1").is_some());
    assert!(registry.mount("v1").is_none());
    assert_eq!(registry.status("v1"), Some(LoadStatus::Pending));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_complete_load_installs_members() {
    let registry = ViewRegistry::new();
    let ticket = registry.mount("v1").expect("ticket");

    assert!(registry.complete_load(&ticket, Ok(sample_members(25))));
    assert_eq!(registry.status("v1"), Some(LoadStatus::Loaded));
    let pages = registry.with_view("v1", |s| s.total_pages());
    assert_eq!(pages, Some(3));
    assert!(registry.inspect("v1", |v| v.loaded_at.is_some()).unwrap());
}

#[test]
fn test_failed_load_is_empty_not_error() {
    let registry = ViewRegistry::new();
    let ticket = registry.mount("v1").expect("ticket");

    assert!(registry.complete_load(&ticket, Err(FetchError::Status(502))));
    assert_eq!(registry.status("v1"), Some(LoadStatus::Failed));
    assert_eq!(registry.with_view("v1", |s| s.members().len()), Some(0));
}

#[test]
fn test_late_load_after_unmount_is_discarded() {
    let registry = ViewRegistry::new();
    let ticket = registry.mount("v1").expect("ticket");
    assert!(registry.unmount("v1"));

    assert!(!registry.complete_load(&ticket, Ok(sample_members(5))));
    assert!(registry.is_empty());
}

#[test]
fn test_late_load_after_remount_is_discarded() {
    let registry = ViewRegistry::new();
    let stale = registry.mount("v1").expect("first ticket");
    registry.unmount("v1");
    let fresh = registry.mount("v1").expect("second ticket");

    assert!(!registry.complete_load(&stale, Ok(sample_members(5))));
    assert_eq!(registry.status("v1"), Some(LoadStatus::Pending));

    assert!(registry.complete_load(&fresh, Ok(sample_members(2))));
    assert_eq!(registry.with_view("v1", |s| s.members().len()), Some(2));
}

#[test]
fn test_with_view_on_missing_view() {
    let registry = ViewRegistry::new();
    assert_eq!(registry.with_view("nope", |s| s.page()), None);
    assert!(!registry.unmount("nope"));
}

#[test]
fn test_evict_idle_drops_quiet_views_and_late_loads() {
    let registry = ViewRegistry::new();
    let ticket = registry.mount("v1").expect("ticket");

    // Nothing has been idle for an hour.
    assert_eq!(registry.evict_idle(Duration::from_secs(3600)), 0);
    assert_eq!(registry.len(), 1);

    assert_eq!(registry.evict_idle(Duration::ZERO), 1);
    assert!(registry.is_empty());
    assert!(!registry.complete_load(&ticket, Ok(sample_members(5))));
    assert!(registry.is_empty());
}

#[test]
fn test_activity_keeps_view_fresh() {
    let registry = ViewRegistry::new();
    registry.mount("quiet").expect("ticket");
    registry.mount("busy").expect("ticket");
    std::thread::sleep(Duration::from_millis(60));

    registry.with_view("busy", |s| s.next_page());
    assert_eq!(registry.evict_idle(Duration::from_millis(50)), 1);
    assert_eq!(registry.status("quiet"), None);
    assert_eq!(registry.status("busy"), Some(LoadStatus::Pending));

    // Revisiting an existing view also counts as activity.
    std::thread::sleep(Duration::from_millis(60));
    assert!(registry.mount("busy").is_none());
    assert_eq!(registry.evict_idle(Duration::from_millis(50)), 0);
}

#[actix_web::test]
async fn test_sweeper_unmounts_idle_views() {
    let registry = ViewRegistry::new();
    for i in 0..20 {
        registry.mount(&format!("v{i}"));
    }
    assert_eq!(registry.len(), 20);

    spawn_view_sweeper(registry.clone(), Duration::ZERO, Duration::from_millis(10));
    actix_web::rt::time::sleep(Duration::from_millis(100)).await;
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_load_view_fetches_once() {
    let registry = ViewRegistry::new();
    let source = StaticMemberSource(sample_members(12));

    load_view(&registry, &source, "v1").await;
    registry.with_view("v1", |s| {
        s.delete(&"1".into());
    });
    // Already mounted: no refetch, the deletion survives.
    load_view(&registry, &source, "v1").await;

    assert_eq!(registry.with_view("v1", |s| s.members().len()), Some(11));
}

#[tokio::test]
async fn test_load_view_with_failing_source() {
    let registry = ViewRegistry::new();
    load_view(&registry, &FailingSource, "v1").await;
    assert_eq!(registry.status("v1"), Some(LoadStatus::Failed));
}
