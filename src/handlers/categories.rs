use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    db::models::QuestionModel,
    extractors::{Page, ResourceId},
    names,
    rejections::{AppError, ResultExt},
    services::trivia::{Categories, CategoryOutcome, TriviaRepository},
    AppState,
};

pub fn routes<R: TriviaRepository + Clone + 'static>() -> Router<AppState<R>> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories::<R>))
        .route(names::CATEGORY_QUESTIONS_URL, get(category_questions::<R>))
}

#[derive(Serialize)]
struct CategoryList {
    success: bool,
    categories: Categories,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<QuestionModel>,
    total_questions: usize,
    current_category: i32,
}

async fn list_categories<R: TriviaRepository + Clone + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<CategoryList>, AppError> {
    let categories = state
        .trivia
        .categories()
        .await
        .reject("could not list categories")?;

    if categories.is_empty() {
        return Err(AppError::NotFound("no categories available"));
    }

    Ok(Json(CategoryList {
        success: true,
        categories,
    }))
}

async fn category_questions<R: TriviaRepository + Clone + 'static>(
    State(state): State<AppState<R>>,
    ResourceId(category_id): ResourceId,
    Page(page): Page,
) -> Result<Json<CategoryQuestions>, AppError> {
    let outcome = state
        .trivia
        .questions_by_category(category_id, page)
        .await
        .reject("could not list questions by category")?;

    match outcome {
        CategoryOutcome::Listed(page) => Ok(Json(CategoryQuestions {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            current_category: category_id,
        })),
        CategoryOutcome::UnknownCategory => Err(AppError::NotFound("category does not exist")),
        CategoryOutcome::PageOutOfRange(e) => Err(e.into()),
    }
}
