use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::{
    db::models::QuestionModel,
    extractors::JsonBody,
    models::NextQuizQuestion,
    names,
    rejections::{AppError, ResultExt},
    services::trivia::{QuizOutcome, TriviaRepository},
    AppState,
};

pub fn routes<R: TriviaRepository + Clone + 'static>() -> Router<AppState<R>> {
    Router::new().route(names::QUIZZES_URL, post(next_question::<R>))
}

#[derive(Serialize)]
struct NextQuestion {
    success: bool,
    /// `null` once the quiz has run out of questions.
    question: Option<QuestionModel>,
}

async fn next_question<R: TriviaRepository + Clone + 'static>(
    State(state): State<AppState<R>>,
    JsonBody(body): JsonBody<NextQuizQuestion>,
) -> Result<Json<NextQuestion>, AppError> {
    let previous = body
        .previous_questions
        .ok_or(AppError::Input("missing previous_questions field"))?;
    let filter = body
        .quiz_category
        .ok_or(AppError::Input("missing quiz_category field"))?;

    let outcome = state
        .trivia
        .next_quiz_question(&previous, filter)
        .await
        .reject("could not select next quiz question")?;

    match outcome {
        QuizOutcome::Next(question) => Ok(Json(NextQuestion {
            success: true,
            question,
        })),
        QuizOutcome::UnknownCategory => Err(AppError::NotFound("category does not exist")),
    }
}
