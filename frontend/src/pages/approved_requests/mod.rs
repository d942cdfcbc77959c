pub mod panel;

pub use panel::ApprovedRequestsPage;
