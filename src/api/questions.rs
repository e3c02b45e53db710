use reqwest::Method;

use crate::error::ApiError;
use crate::http::client::ApiClient;
use crate::models::{NewQuestion, Question};

impl ApiClient {
    /// GET `questions/`, optionally filtered to one test via `?test={id}`.
    pub async fn list_questions(&self, test: Option<i64>) -> Result<Vec<Question>, ApiError> {
        let mut builder = self.request(Method::GET, "questions/")?;
        if let Some(test_id) = test {
            builder = builder.query(&[("test", test_id)]);
        }
        self.execute(builder).await
    }

    /// GET `questions/{id}/`
    pub async fn get_question(&self, id: i64) -> Result<Question, ApiError> {
        self.execute(self.request(Method::GET, &format!("questions/{id}/"))?)
            .await
    }

    /// POST `questions/`. The backend requires `test` in the payload and
    /// rejects the request with a validation error otherwise.
    pub async fn create_question(&self, question: &NewQuestion) -> Result<Question, ApiError> {
        self.execute(self.request(Method::POST, "questions/")?.json(question))
            .await
    }

    /// PUT `questions/{id}/`
    pub async fn update_question(
        &self,
        id: i64,
        question: &NewQuestion,
    ) -> Result<Question, ApiError> {
        self.execute(
            self.request(Method::PUT, &format!("questions/{id}/"))?
                .json(question),
        )
        .await
    }

    /// DELETE `questions/{id}/`
    pub async fn delete_question(&self, id: i64) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::DELETE, &format!("questions/{id}/"))?)
            .await
    }
}
