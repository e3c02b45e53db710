use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewClass {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub class_group: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewStudent {
    pub class_group: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkingPrinciple {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Test {
    pub id: i64,
    pub name: String,
    pub class_group: i64,
    pub date_created: DateTime<Utc>,
    pub marking_principle: Option<i64>,
    /// Server-computed sum of `max_mark` over the test's questions.
    pub total_max_mark: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTest {
    pub name: String,
    pub class_group: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marking_principle: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub test: i64,
    pub q_number: u32,
    pub description: Option<String>,
    /// Media URL of the question diagram, when one was uploaded.
    pub question_image: Option<String>,
    pub max_mark: u32,
    pub model_answer: String,
    pub marking_scheme: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewQuestion {
    pub test: i64,
    pub q_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub max_mark: u32,
    pub model_answer: String,
    pub marking_scheme: String,
}

/// An answer as echoed back right after upload, before any evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerUpload {
    pub id: i64,
    pub question: i64,
    pub student: i64,
    pub uploaded_image: String,
    pub is_evaluated: bool,
}

/// The full evaluation view of an answer, with the related student and
/// question expanded inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub id: i64,
    pub student: Student,
    pub question: Question,
    pub uploaded_image: String,
    pub ocr_text: Option<String>,
    pub mark_gained: f64,
    pub ai_evaluation_summary: Option<String>,
    pub ai_strength_points: Option<String>,
    pub ai_improvement_points: Option<String>,
    pub is_evaluated: bool,
}

/// One row of a per-test report: a student and their total across the
/// test's questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResult {
    pub id: i64,
    pub name: String,
    pub total_mark_gained: f64,
}
