pub mod quick_actions;
pub mod recent;
pub mod summary;

pub use quick_actions::QuickActions;
pub use recent::RecentRequests;
pub use summary::SummarySection;
