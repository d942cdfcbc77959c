use crate::api::{ApiClient, ApiError, TravelRequest};
use std::rc::Rc;

/// Admin-only listings and decisions.
#[derive(Clone)]
pub struct AdminRequestsRepository {
    client: Rc<ApiClient>,
}

impl AdminRequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<TravelRequest>, ApiError> {
        self.client.all_requests().await
    }

    pub async fn list_approved(&self) -> Result<Vec<TravelRequest>, ApiError> {
        self.client.approved_requests().await
    }

    /// Resolves to the id that was approved.
    pub async fn approve(&self, id: String) -> Result<String, ApiError> {
        self.client.approve_request(&id).await.map(|_| id)
    }

    /// Resolves to the id that was deleted.
    pub async fn delete(&self, id: String) -> Result<String, ApiError> {
        self.client.delete_request(&id).await.map(|_| id)
    }
}
