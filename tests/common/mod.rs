#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use color_eyre::Result;
use trivia::db::models::{CategoryModel, NewQuestionModel, QuestionModel};
use trivia::db::Db;
use trivia::pagination::Paginator;
use trivia::services::trivia::{TriviaRepository, TriviaService};
use trivia::AppState;

/// Connects to the Postgres test database named by `DATABASE_URL`.
pub async fn create_test_db() -> Db {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    Db::new(&url).await.expect("failed to create test database")
}

#[derive(Default)]
struct Store {
    questions: Vec<QuestionModel>,
    categories: Vec<CategoryModel>,
    next_id: i32,
    fail: bool,
    panic: bool,
}

/// In-memory question bank used to drive the router without a database.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    store: Arc<Mutex<Store>>,
}

impl MemoryRepository {
    pub fn with_default_categories() -> Self {
        let repo = Self::default();
        {
            let mut store = repo.store.lock().unwrap();
            for (id, kind) in [
                (1, "Science"),
                (2, "Art"),
                (3, "Geography"),
                (4, "History"),
                (5, "Entertainment"),
                (6, "Sports"),
            ] {
                store.categories.push(CategoryModel {
                    id,
                    kind: kind.to_string(),
                });
            }
        }
        repo
    }

    pub fn add_question(&self, question: &str, category: i32) -> i32 {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.questions.push(QuestionModel {
            id,
            question: question.to_string(),
            answer: format!("answer to {question}"),
            category,
            difficulty: 1,
        });
        id
    }

    pub fn question_count(&self) -> usize {
        self.store.lock().unwrap().questions.len()
    }

    /// Makes every subsequent storage call fail.
    pub fn fail_storage(&self) {
        self.store.lock().unwrap().fail = true;
    }

    /// Makes every subsequent storage call panic.
    pub fn panic_on_access(&self) {
        self.store.lock().unwrap().panic = true;
    }

    fn check(&self) -> Result<()> {
        let (fail, panic) = {
            let store = self.store.lock().unwrap();
            (store.fail, store.panic)
        };
        if panic {
            panic!("storage invariant broken");
        }
        if fail {
            return Err(color_eyre::eyre::eyre!("storage is unavailable"));
        }
        Ok(())
    }
}

impl TriviaRepository for MemoryRepository {
    async fn list_all_questions(&self) -> Result<Vec<QuestionModel>> {
        self.check()?;
        Ok(self.store.lock().unwrap().questions.clone())
    }

    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<QuestionModel>> {
        self.check()?;
        let store = self.store.lock().unwrap();
        Ok(store
            .questions
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<QuestionModel>> {
        self.check()?;
        let term = term.to_lowercase();
        let store = self.store.lock().unwrap();
        Ok(store
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: &NewQuestionModel) -> Result<i32> {
        self.check()?;
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.questions.push(QuestionModel {
            id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        });
        Ok(id)
    }

    async fn delete_question(&self, question_id: i32) -> Result<bool> {
        self.check()?;
        let mut store = self.store.lock().unwrap();
        let before = store.questions.len();
        store.questions.retain(|q| q.id != question_id);
        Ok(store.questions.len() < before)
    }

    async fn list_categories(&self) -> Result<Vec<CategoryModel>> {
        self.check()?;
        Ok(self.store.lock().unwrap().categories.clone())
    }

    async fn category_exists(&self, category_id: i32) -> Result<bool> {
        self.check()?;
        Ok(self
            .store
            .lock()
            .unwrap()
            .categories
            .iter()
            .any(|c| c.id == category_id))
    }
}

pub fn app(repo: MemoryRepository) -> axum::Router {
    trivia::router(AppState {
        trivia: TriviaService::new(repo, Paginator::new(10)),
    })
}
