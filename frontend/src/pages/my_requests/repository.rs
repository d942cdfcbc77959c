use crate::api::{ApiClient, ApiError, CreateTravelRequest, TravelRequest};
use std::rc::Rc;

/// The signed-in employee's own travel requests.
#[derive(Clone)]
pub struct MyRequestsRepository {
    client: Rc<ApiClient>,
}

impl MyRequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<TravelRequest>, ApiError> {
        self.client.my_requests().await
    }

    pub async fn get(&self, id: &str) -> Result<TravelRequest, ApiError> {
        self.client.my_request(id).await
    }

    pub async fn create(&self, payload: CreateTravelRequest) -> Result<TravelRequest, ApiError> {
        self.client.create_request(&payload).await
    }
}
