use reqwest::Method;
use reqwest::multipart::Form;

use crate::error::ApiError;
use crate::http::client::{ApiClient, file_part};
use crate::models::{AnswerEvaluation, AnswerUpload};

impl ApiClient {
    /// POST `answers/` — upload a photographed answer sheet for one
    /// student and question. Sent as multipart form data.
    pub async fn upload_answer(
        &self,
        question: i64,
        student: i64,
        file_name: &str,
        image: Vec<u8>,
    ) -> Result<AnswerUpload, ApiError> {
        let form = Form::new()
            .text("question", question.to_string())
            .text("student", student.to_string())
            .part("uploaded_image", file_part(file_name, image)?);
        self.execute(self.request(Method::POST, "answers/")?.multipart(form))
            .await
    }

    /// GET `answers/find/?student={}&question={}` — look up the single
    /// answer a student gave to a question. 404 when none exists.
    pub async fn find_answer(
        &self,
        student: i64,
        question: i64,
    ) -> Result<AnswerEvaluation, ApiError> {
        self.execute(
            self.request(Method::GET, "answers/find/")?
                .query(&[("student", student), ("question", question)]),
        )
        .await
    }

    /// GET `answers/{id}/`
    pub async fn get_answer(&self, id: i64) -> Result<AnswerEvaluation, ApiError> {
        self.execute(self.request(Method::GET, &format!("answers/{id}/"))?)
            .await
    }

    /// POST `answers/{id}/run-ocr/` — transcribe the uploaded image and
    /// store the text on the answer.
    pub async fn run_ocr(&self, id: i64) -> Result<AnswerEvaluation, ApiError> {
        self.execute(self.request(Method::POST, &format!("answers/{id}/run-ocr/"))?)
            .await
    }

    /// POST `answers/{id}/run-marking/` — mark the answer against the
    /// question's scheme. `corrected_text` replaces the stored OCR text
    /// when the teacher has fixed up the transcription.
    pub async fn run_marking(
        &self,
        id: i64,
        corrected_text: Option<&str>,
    ) -> Result<AnswerEvaluation, ApiError> {
        let mut builder = self.request(Method::POST, &format!("answers/{id}/run-marking/"))?;
        if let Some(text) = corrected_text {
            builder = builder.json(&serde_json::json!({ "corrected_text": text }));
        }
        self.execute(builder).await
    }

    /// DELETE `answers/{id}/`
    pub async fn delete_answer(&self, id: i64) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::DELETE, &format!("answers/{id}/"))?)
            .await
    }
}
