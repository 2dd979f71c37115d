use color_eyre::Result;

use super::models::{CategoryModel, NewQuestionModel, QuestionModel};
use super::Db;
use crate::services::trivia::TriviaRepository;

impl TriviaRepository for Db {
    async fn list_all_questions(&self) -> Result<Vec<QuestionModel>> {
        Db::list_all_questions(self).await
    }

    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<QuestionModel>> {
        Db::list_questions_by_category(self, category_id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<QuestionModel>> {
        Db::search_questions(self, term).await
    }

    async fn insert_question(&self, question: &NewQuestionModel) -> Result<i32> {
        Db::insert_question(self, question).await
    }

    async fn delete_question(&self, question_id: i32) -> Result<bool> {
        Db::delete_question(self, question_id).await
    }

    async fn list_categories(&self) -> Result<Vec<CategoryModel>> {
        Db::list_categories(self).await
    }

    async fn category_exists(&self, category_id: i32) -> Result<bool> {
        Db::category_exists(self, category_id).await
    }
}
