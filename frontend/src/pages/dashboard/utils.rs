use crate::{
    api::TravelRequest,
    utils::filter::{count_by_status, StatusCounts},
};

pub const RECENT_LIMIT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub counts: StatusCounts,
    pub recent: Vec<TravelRequest>,
}

/// The first `limit` requests in the order the backend returned them, which
/// lists the newest first.
pub fn most_recent(requests: &[TravelRequest], limit: usize) -> Vec<TravelRequest> {
    requests.iter().take(limit).cloned().collect()
}

pub fn summarize(requests: &[TravelRequest]) -> DashboardSnapshot {
    DashboardSnapshot {
        counts: count_by_status(requests),
        recent: most_recent(requests, RECENT_LIMIT),
    }
}
