use askama::Template;

use super::PageContext;
use crate::models::dashboard::PageView;
use crate::views::LoadStatus;

#[derive(Template)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub view: PageView,
    pub status: LoadStatus,
}

impl DashboardTemplate {
    pub fn is_pending(&self) -> bool {
        self.status == LoadStatus::Pending
    }
}
