use reqwest::Method;
use reqwest::multipart::Form;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::client::{ApiClient, file_part};

#[derive(Debug, Deserialize)]
struct ModelAnswerResponse {
    model_answer: String,
}

impl ApiClient {
    /// POST `generate-model-answer/` — have the backend draft an ideal
    /// answer from a question description and marking scheme, optionally
    /// grounded in a diagram image. Multipart because of the image.
    pub async fn generate_model_answer(
        &self,
        description: &str,
        marking_scheme: &str,
        question_image: Option<(&str, Vec<u8>)>,
    ) -> Result<String, ApiError> {
        let mut form = Form::new()
            .text("description", description.to_string())
            .text("marking_scheme", marking_scheme.to_string());
        if let Some((file_name, bytes)) = question_image {
            form = form.part("question_image", file_part(file_name, bytes)?);
        }
        let response: ModelAnswerResponse = self
            .execute(self.request(Method::POST, "generate-model-answer/")?.multipart(form))
            .await?;
        Ok(response.model_answer)
    }
}
