use reqwest::Method;

use crate::error::ApiError;
use crate::http::client::ApiClient;
use crate::models::MarkingPrinciple;

impl ApiClient {
    /// GET `marking-principles/`
    pub async fn list_marking_principles(&self) -> Result<Vec<MarkingPrinciple>, ApiError> {
        self.execute(self.request(Method::GET, "marking-principles/")?)
            .await
    }

    /// POST `marking-principles/`. Only the name travels through the API;
    /// the principle's PDF and extracted text are managed server-side.
    pub async fn create_marking_principle(&self, name: &str) -> Result<MarkingPrinciple, ApiError> {
        self.execute(
            self.request(Method::POST, "marking-principles/")?
                .json(&serde_json::json!({ "name": name })),
        )
        .await
    }

    /// DELETE `marking-principles/{id}/`
    pub async fn delete_marking_principle(&self, id: i64) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::DELETE, &format!("marking-principles/{id}/"))?)
            .await
    }
}
