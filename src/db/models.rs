// Database model structs

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct QuestionModel {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CategoryModel {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// A validated question that is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestionModel {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
