use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::{
    db::models::QuestionModel,
    extractors::{JsonBody, Page, ResourceId},
    models::{NewQuestion, SearchQuestions},
    names,
    rejections::{AppError, ResultExt},
    services::trivia::{
        Categories, CreateOutcome, DeleteOutcome, ListOutcome, PageOutcome, TriviaRepository,
    },
    AppState,
};

pub fn routes<R: TriviaRepository + Clone + 'static>() -> Router<AppState<R>> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions::<R>).post(create_question::<R>),
        )
        .route(names::SEARCH_QUESTIONS_URL, post(search_questions::<R>))
        .route(names::QUESTION_URL, delete(delete_question::<R>))
}

#[derive(Serialize)]
struct QuestionList {
    success: bool,
    questions: Vec<QuestionModel>,
    total_questions: usize,
    categories: Categories,
    current_category: Option<i32>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<QuestionModel>,
    total_questions: usize,
    current_category: Option<i32>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i32,
    questions: Vec<QuestionModel>,
    total_questions: usize,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i32,
}

async fn list_questions<R: TriviaRepository + Clone + 'static>(
    State(state): State<AppState<R>>,
    Page(page): Page,
) -> Result<Json<QuestionList>, AppError> {
    let outcome = state
        .trivia
        .list_questions(page)
        .await
        .reject("could not list questions")?;

    match outcome {
        ListOutcome::Listed { page, categories } => Ok(Json(QuestionList {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            categories,
            current_category: None,
        })),
        ListOutcome::NoCategories => Err(AppError::NotFound("no categories available")),
        ListOutcome::PageOutOfRange(e) => Err(e.into()),
    }
}

async fn create_question<R: TriviaRepository + Clone + 'static>(
    State(state): State<AppState<R>>,
    Page(page): Page,
    JsonBody(body): JsonBody<NewQuestion>,
) -> Result<Json<Created>, AppError> {
    let outcome = state
        .trivia
        .create_question(body, page)
        .await
        .reject("could not create question")?;

    match outcome {
        CreateOutcome::Created { id, page } => Ok(Json(Created {
            success: true,
            created: id,
            questions: page.questions,
            total_questions: page.total_questions,
        })),
        CreateOutcome::InvalidFields(reason) => Err(AppError::Input(reason)),
        CreateOutcome::UnknownCategory => Err(AppError::NotFound("category does not exist")),
        CreateOutcome::PageOutOfRange(e) => Err(e.into()),
    }
}

async fn search_questions<R: TriviaRepository + Clone + 'static>(
    State(state): State<AppState<R>>,
    Page(page): Page,
    JsonBody(body): JsonBody<SearchQuestions>,
) -> Result<Json<SearchResults>, AppError> {
    let term = body
        .search_term
        .ok_or(AppError::Input("missing searchTerm field"))?;

    let outcome = state
        .trivia
        .search_questions(&term, page)
        .await
        .reject("could not search questions")?;

    match outcome {
        PageOutcome::Listed(page) => Ok(Json(SearchResults {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            current_category: None,
        })),
        PageOutcome::PageOutOfRange(e) => Err(e.into()),
    }
}

async fn delete_question<R: TriviaRepository + Clone + 'static>(
    State(state): State<AppState<R>>,
    ResourceId(question_id): ResourceId,
) -> Result<Json<Deleted>, AppError> {
    let outcome = state
        .trivia
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    match outcome {
        DeleteOutcome::Deleted(id) => Ok(Json(Deleted {
            success: true,
            deleted: id,
        })),
        DeleteOutcome::NotFound => Err(AppError::NotFound("question does not exist")),
    }
}
