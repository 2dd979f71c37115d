use color_eyre::Result;

use super::models::{NewQuestionModel, QuestionModel};
use super::Db;

impl Db {
    pub async fn list_all_questions(&self) -> Result<Vec<QuestionModel>> {
        let questions = sqlx::query_as::<_, QuestionModel>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<QuestionModel>> {
        let questions = sqlx::query_as::<_, QuestionModel>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring match on the question text. `%` and `_` in
    /// `term` match literally.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<QuestionModel>> {
        let pattern = format!("%{}%", escape_like(term));

        let questions = sqlx::query_as::<_, QuestionModel>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_question(&self, question_id: i32) -> Result<Option<QuestionModel>> {
        let question = sqlx::query_as::<_, QuestionModel>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn insert_question(&self, question: &NewQuestionModel) -> Result<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new question created with id: {id} in category: {}", question.category);
        Ok(id)
    }

    /// Returns `false` when no question had that id.
    pub async fn delete_question(&self, question_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("question deleted with id: {question_id}");
        }
        Ok(deleted)
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
