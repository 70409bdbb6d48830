pub mod edit;
pub mod state;
pub mod view;

pub use self::edit::{Draft, RowMode};
pub use self::state::{DashboardState, PAGE_SIZE, total_pages_for};
pub use self::view::{PageView, RowView};
