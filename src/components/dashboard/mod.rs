//! Dashboard page and its parts.

mod article_list;
mod breadcrumb;
#[allow(clippy::module_inception)]
mod dashboard;
mod reader;

pub use article_list::{ActiveScope, ArticleList, FilterTabs, ScopePicker};
pub use breadcrumb::Breadcrumb;
pub use dashboard::DashboardPage;
pub use reader::ReaderOverlay;
