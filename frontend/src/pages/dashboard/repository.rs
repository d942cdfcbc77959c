use crate::api::{ApiClient, ApiError, TravelRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Admins see every request, employees only their own.
    pub async fn load(&self, is_admin: bool) -> Result<Vec<TravelRequest>, ApiError> {
        if is_admin {
            self.client.all_requests().await
        } else {
            self.client.my_requests().await
        }
    }
}
