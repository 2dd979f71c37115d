use std::collections::{BTreeMap, HashSet};
use std::future::Future;

use color_eyre::Result;

use crate::db::models::{CategoryModel, NewQuestionModel, QuestionModel};
use crate::db::Db;
use crate::models::NewQuestion;
use crate::names;
use crate::pagination::{PageError, Paginator};
use crate::quiz::{self, CategoryFilter};

// ---------------------------------------------------------------------------
// TriviaRepository trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait TriviaRepository: Send + Sync {
    fn list_all_questions(&self) -> impl Future<Output = Result<Vec<QuestionModel>>> + Send;

    fn list_questions_by_category(
        &self,
        category_id: i32,
    ) -> impl Future<Output = Result<Vec<QuestionModel>>> + Send;

    /// Case-insensitive substring match on the question text.
    fn search_questions(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<QuestionModel>>> + Send;

    fn insert_question(
        &self,
        question: &NewQuestionModel,
    ) -> impl Future<Output = Result<i32>> + Send;

    /// Resolves to `false` when there was nothing to delete.
    fn delete_question(&self, question_id: i32) -> impl Future<Output = Result<bool>> + Send;

    fn list_categories(&self) -> impl Future<Output = Result<Vec<CategoryModel>>> + Send;

    fn category_exists(&self, category_id: i32) -> impl Future<Output = Result<bool>> + Send;
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Category id to display name, ordered by id.
pub type Categories = BTreeMap<i32, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<QuestionModel>,
    /// Size of the whole result set, not of this page.
    pub total_questions: usize,
    pub page: u32,
}

pub enum ListOutcome {
    Listed {
        page: QuestionPage,
        categories: Categories,
    },
    NoCategories,
    PageOutOfRange(PageError),
}

pub enum PageOutcome {
    Listed(QuestionPage),
    PageOutOfRange(PageError),
}

pub enum CategoryOutcome {
    Listed(QuestionPage),
    UnknownCategory,
    PageOutOfRange(PageError),
}

pub enum CreateOutcome {
    Created { id: i32, page: QuestionPage },
    /// A field was missing or outside its domain.
    InvalidFields(&'static str),
    UnknownCategory,
    PageOutOfRange(PageError),
}

pub enum DeleteOutcome {
    Deleted(i32),
    NotFound,
}

pub enum QuizOutcome {
    /// `None` once every eligible question has been served.
    Next(Option<QuestionModel>),
    UnknownCategory,
}

// ---------------------------------------------------------------------------
// TriviaService
// ---------------------------------------------------------------------------

pub struct TriviaService<R: TriviaRepository = Db> {
    repo: R,
    paginator: Paginator,
}

impl<R: TriviaRepository + Clone> Clone for TriviaService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            paginator: self.paginator,
        }
    }
}

impl<R: TriviaRepository> TriviaService<R> {
    pub fn new(repo: R, paginator: Paginator) -> Self {
        Self { repo, paginator }
    }

    fn page_of(&self, questions: Vec<QuestionModel>, page: u32) -> Result<QuestionPage, PageError> {
        let total_questions = questions.len();
        let questions = self.paginator.paginate(&questions, page)?.to_vec();

        Ok(QuestionPage {
            questions,
            total_questions,
            page,
        })
    }

    pub async fn categories(&self) -> Result<Categories> {
        let categories = self.repo.list_categories().await?;
        Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
    }

    pub async fn list_questions(&self, page: u32) -> Result<ListOutcome> {
        let questions = self.repo.list_all_questions().await?;

        let page = match self.page_of(questions, page) {
            Ok(page) => page,
            Err(e) => return Ok(ListOutcome::PageOutOfRange(e)),
        };

        let categories = self.categories().await?;
        if categories.is_empty() {
            return Ok(ListOutcome::NoCategories);
        }

        Ok(ListOutcome::Listed { page, categories })
    }

    pub async fn questions_by_category(&self, category_id: i32, page: u32) -> Result<CategoryOutcome> {
        if !self.repo.category_exists(category_id).await? {
            return Ok(CategoryOutcome::UnknownCategory);
        }

        let questions = self.repo.list_questions_by_category(category_id).await?;

        Ok(match self.page_of(questions, page) {
            Ok(page) => CategoryOutcome::Listed(page),
            Err(e) => CategoryOutcome::PageOutOfRange(e),
        })
    }

    pub async fn search_questions(&self, term: &str, page: u32) -> Result<PageOutcome> {
        let questions = self.repo.search_questions(term).await?;
        tracing::debug!("search for {term:?} matched {} questions", questions.len());

        Ok(match self.page_of(questions, page) {
            Ok(page) => PageOutcome::Listed(page),
            Err(e) => PageOutcome::PageOutOfRange(e),
        })
    }

    /// Validates and stores a question, then returns the requested page of the
    /// updated question list. The page is checked before anything is written.
    pub async fn create_question(&self, question: NewQuestion, page: u32) -> Result<CreateOutcome> {
        let question = match validate(question) {
            Ok(question) => question,
            Err(reason) => return Ok(CreateOutcome::InvalidFields(reason)),
        };

        if !self.repo.category_exists(question.category).await? {
            return Ok(CreateOutcome::UnknownCategory);
        }

        let existing = self.repo.list_all_questions().await?.len();
        if let Err(e) = self.paginator.check(existing + 1, page) {
            return Ok(CreateOutcome::PageOutOfRange(e));
        }

        let id = self.repo.insert_question(&question).await?;

        let questions = self.repo.list_all_questions().await?;
        Ok(match self.page_of(questions, page) {
            Ok(page) => CreateOutcome::Created { id, page },
            Err(e) => CreateOutcome::PageOutOfRange(e),
        })
    }

    pub async fn delete_question(&self, question_id: i32) -> Result<DeleteOutcome> {
        if self.repo.delete_question(question_id).await? {
            Ok(DeleteOutcome::Deleted(question_id))
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }

    pub async fn next_quiz_question(
        &self,
        previous_questions: &[i32],
        filter: CategoryFilter,
    ) -> Result<QuizOutcome> {
        let questions = match filter {
            CategoryFilter::All => self.repo.list_all_questions().await?,
            CategoryFilter::Only(category_id) => {
                if !self.repo.category_exists(category_id).await? {
                    return Ok(QuizOutcome::UnknownCategory);
                }
                self.repo.list_questions_by_category(category_id).await?
            }
        };

        let served: HashSet<i32> = previous_questions.iter().copied().collect();
        let next = {
            let mut rng = rand::thread_rng();
            quiz::next_question(&questions, filter, &served, &mut rng).cloned()
        };

        if next.is_none() {
            tracing::debug!("quiz exhausted after {} questions", served.len());
        }

        Ok(QuizOutcome::Next(next))
    }
}

fn validate(question: NewQuestion) -> std::result::Result<NewQuestionModel, &'static str> {
    let text = question
        .question
        .filter(|q| !q.trim().is_empty())
        .ok_or("question text is required")?;
    let answer = question
        .answer
        .filter(|a| !a.trim().is_empty())
        .ok_or("answer text is required")?;
    let category = question.category.ok_or("category is required")?;
    let difficulty = question.difficulty.ok_or("difficulty is required")?;

    if !(names::MIN_DIFFICULTY..=names::MAX_DIFFICULTY).contains(&difficulty) {
        return Err("difficulty is out of range");
    }

    Ok(NewQuestionModel {
        question: text,
        answer,
        category,
        difficulty,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
