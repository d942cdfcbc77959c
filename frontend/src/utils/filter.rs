use crate::api::{TravelRequest, TravelStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TravelStatus),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(TravelStatus::Pending),
        StatusFilter::Only(TravelStatus::Approved),
        StatusFilter::Only(TravelStatus::Rejected),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Unknown values select everything.
    pub fn parse(value: &str) -> Self {
        TravelStatus::parse(value)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn matches(&self, status: TravelStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive match of `query` over destination and purpose, and over
/// the requester's name and email when `include_requester` is set.
pub fn matches_query(request: &TravelRequest, query: &str, include_requester: bool) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    if contains(&request.destination, &needle) || contains(&request.purpose, &needle) {
        return true;
    }
    include_requester
        && (request
            .requester_name()
            .map(|name| contains(&name, &needle))
            .unwrap_or(false)
            || request
                .requester_email()
                .map(|email| contains(&email, &needle))
                .unwrap_or(false))
}

pub fn filter_requests(
    requests: &[TravelRequest],
    query: &str,
    status: StatusFilter,
    include_requester: bool,
) -> Vec<TravelRequest> {
    requests
        .iter()
        .filter(|r| status.matches(r.status))
        .filter(|r| matches_query(r, query, include_requester))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn count_by_status(requests: &[TravelRequest]) -> StatusCounts {
    requests
        .iter()
        .fold(StatusCounts::default(), |mut counts, request| {
            counts.total += 1;
            match request.status {
                TravelStatus::Pending => counts.pending += 1,
                TravelStatus::Approved => counts.approved += 1,
                TravelStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn requests() -> Vec<TravelRequest> {
        serde_json::from_value(json!([
            {
                "_id": "r1",
                "user_id": { "_id": "u1", "first_name": "Ada", "email": "ada@x.com" },
                "destination": "Lisbon",
                "purpose": "Conference",
                "status": "pending"
            },
            {
                "_id": "r2",
                "user_id": { "_id": "u2", "first_name": "Grace", "email": "grace@x.com" },
                "destination": "Oslo",
                "purpose": "Client visit",
                "status": "approved"
            },
            {
                "_id": "r3",
                "user_id": "u1",
                "destination": "Rome",
                "purpose": "Training",
                "status": "rejected"
            }
        ]))
        .unwrap()
    }

    fn ids(list: Vec<TravelRequest>) -> Vec<String> {
        list.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn query_is_case_insensitive_over_destination_and_purpose() {
        let list = requests();
        assert_eq!(ids(filter_requests(&list, "LISB", StatusFilter::All, false)), ["r1"]);
        assert_eq!(ids(filter_requests(&list, "client", StatusFilter::All, false)), ["r2"]);
        assert_eq!(filter_requests(&list, "  ", StatusFilter::All, false).len(), 3);
    }

    #[test]
    fn requester_fields_only_match_when_enabled() {
        let list = requests();
        assert!(filter_requests(&list, "grace", StatusFilter::All, false).is_empty());
        assert_eq!(ids(filter_requests(&list, "grace", StatusFilter::All, true)), ["r2"]);
        assert_eq!(ids(filter_requests(&list, "ada@x", StatusFilter::All, true)), ["r1"]);
    }

    #[test]
    fn status_filter_combines_with_query() {
        let list = requests();
        let pending = StatusFilter::Only(TravelStatus::Pending);
        assert_eq!(ids(filter_requests(&list, "", pending, true)), ["r1"]);
        assert!(filter_requests(&list, "oslo", pending, true).is_empty());
    }

    #[test]
    fn status_filter_parses_select_values() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("rejected"),
            StatusFilter::Only(TravelStatus::Rejected)
        );
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
        assert_eq!(StatusFilter::OPTIONS[1].as_str(), "pending");
    }

    #[test]
    fn counts_group_by_status() {
        let counts = count_by_status(&requests());
        assert_eq!(
            counts,
            StatusCounts {
                total: 3,
                pending: 1,
                approved: 1,
                rejected: 1
            }
        );
    }
}
