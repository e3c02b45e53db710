use reqwest::Method;

use crate::error::ApiError;
use crate::http::client::ApiClient;
use crate::models::{NewStudent, Student};

impl ApiClient {
    /// GET `students/`
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.execute(self.request(Method::GET, "students/")?).await
    }

    /// GET `students/{id}/`
    pub async fn get_student(&self, id: i64) -> Result<Student, ApiError> {
        self.execute(self.request(Method::GET, &format!("students/{id}/"))?)
            .await
    }

    /// POST `students/`
    pub async fn create_student(&self, student: &NewStudent) -> Result<Student, ApiError> {
        self.execute(self.request(Method::POST, "students/")?.json(student))
            .await
    }

    /// DELETE `students/{id}/`
    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::DELETE, &format!("students/{id}/"))?)
            .await
    }
}
