use serde_json::Value;

use super::{
    client::{path_segment, ApiClient, RequestOptions},
    error::ApiError,
    types::{CreateTravelRequest, TravelRequest},
};

impl ApiClient {
    pub async fn my_requests(&self) -> Result<Vec<TravelRequest>, ApiError> {
        self.call("/travel-requests/my", RequestOptions::get()).await
    }

    pub async fn my_request(&self, id: &str) -> Result<TravelRequest, ApiError> {
        self.call(
            &format!("/travel-requests/my/{}", path_segment(id)),
            RequestOptions::get(),
        )
        .await
    }

    pub async fn create_request(
        &self,
        payload: &CreateTravelRequest,
    ) -> Result<TravelRequest, ApiError> {
        let body =
            serde_json::to_value(payload).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.call("/travel-requests", RequestOptions::post(body))
            .await
    }

    pub async fn all_requests(&self) -> Result<Vec<TravelRequest>, ApiError> {
        self.call("/travel-requests", RequestOptions::get()).await
    }

    pub async fn approved_requests(&self) -> Result<Vec<TravelRequest>, ApiError> {
        self.call("/travel-requests/approved", RequestOptions::get())
            .await
    }

    pub async fn approve_request(&self, id: &str) -> Result<Value, ApiError> {
        self.call(
            &format!("/travel-requests/{}/approve", path_segment(id)),
            RequestOptions::put(),
        )
        .await
    }

    pub async fn delete_request(&self, id: &str) -> Result<Value, ApiError> {
        self.call(
            &format!("/travel-requests/{}", path_segment(id)),
            RequestOptions::delete(),
        )
        .await
    }
}
