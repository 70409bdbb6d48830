use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::dashboard::PageView;
use crate::models::member::MemberId;
use crate::views::{LoadStatus, View};

/// JSON snapshot of a dashboard view: the current page plus selection.
#[derive(Serialize, Debug, Clone)]
pub struct DashboardSnapshot {
    pub status: LoadStatus,
    pub loaded_at: Option<DateTime<Utc>>,
    pub selected: Vec<MemberId>,
    #[serde(flatten)]
    pub view: PageView,
}

impl From<&View> for DashboardSnapshot {
    fn from(v: &View) -> Self {
        DashboardSnapshot {
            status: v.status,
            loaded_at: v.loaded_at,
            selected: v.state.selected().iter().cloned().collect(),
            view: v.state.page_view(),
        }
    }
}
