use reqwest::Method;

use crate::error::ApiError;
use crate::http::client::ApiClient;
use crate::models::{Class, NewClass, Student, Test};

impl ApiClient {
    /// GET `classes/`
    pub async fn list_classes(&self) -> Result<Vec<Class>, ApiError> {
        self.execute(self.request(Method::GET, "classes/")?).await
    }

    /// GET `classes/{id}/`
    pub async fn get_class(&self, id: i64) -> Result<Class, ApiError> {
        self.execute(self.request(Method::GET, &format!("classes/{id}/"))?)
            .await
    }

    /// POST `classes/`
    pub async fn create_class(&self, class: &NewClass) -> Result<Class, ApiError> {
        self.execute(self.request(Method::POST, "classes/")?.json(class))
            .await
    }

    /// PUT `classes/{id}/`
    pub async fn update_class(&self, id: i64, class: &NewClass) -> Result<Class, ApiError> {
        self.execute(self.request(Method::PUT, &format!("classes/{id}/"))?.json(class))
            .await
    }

    /// DELETE `classes/{id}/`
    pub async fn delete_class(&self, id: i64) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::DELETE, &format!("classes/{id}/"))?)
            .await
    }

    /// GET `classes/{id}/students/` — the class roster.
    pub async fn class_students(&self, id: i64) -> Result<Vec<Student>, ApiError> {
        self.execute(self.request(Method::GET, &format!("classes/{id}/students/"))?)
            .await
    }

    /// GET `classes/{id}/tests/` — tests given to the class.
    pub async fn class_tests(&self, id: i64) -> Result<Vec<Test>, ApiError> {
        self.execute(self.request(Method::GET, &format!("classes/{id}/tests/"))?)
            .await
    }
}
