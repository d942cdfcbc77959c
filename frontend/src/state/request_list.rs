use crate::api::{TravelRequest, TravelStatus};

/// A local mutation confirmed by the backend but not yet seen in a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalPatch {
    Approved(String),
    Removed(String),
}

impl LocalPatch {
    fn apply(&self, requests: &mut Vec<TravelRequest>) {
        match self {
            LocalPatch::Approved(id) => {
                if let Some(request) = requests.iter_mut().find(|r| &r.id == id) {
                    request.status = TravelStatus::Approved;
                }
            }
            LocalPatch::Removed(id) => requests.retain(|r| &r.id != id),
        }
    }
}

/// The last authoritative list with tentative patches layered on top.
/// Patches are dropped as soon as a fresh list arrives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestList {
    authoritative: Vec<TravelRequest>,
    patches: Vec<LocalPatch>,
}

impl RequestList {
    pub fn new(authoritative: Vec<TravelRequest>) -> Self {
        Self {
            authoritative,
            patches: Vec::new(),
        }
    }

    pub fn reconcile(&mut self, fresh: Vec<TravelRequest>) {
        self.authoritative = fresh;
        self.patches.clear();
    }

    pub fn apply(&mut self, patch: LocalPatch) {
        self.patches.push(patch);
    }

    pub fn pending_patches(&self) -> usize {
        self.patches.len()
    }

    pub fn view(&self) -> Vec<TravelRequest> {
        let mut requests = self.authoritative.clone();
        for patch in &self.patches {
            patch.apply(&mut requests);
        }
        requests
    }
}
