pub mod config;
pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod pagination;
pub mod quiz;
pub mod rejections;
pub mod services;

use axum::{
    http::{header, HeaderName, Method},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};

use services::trivia::{TriviaRepository, TriviaService};

#[derive(Clone)]
pub struct AppState<R: TriviaRepository = db::Db> {
    pub trivia: TriviaService<R>,
}

pub fn router<R: TriviaRepository + Clone + 'static>(state: AppState<R>) -> Router {
    Router::<AppState<R>>::new()
        .merge(handlers::questions::routes::<R>())
        .merge(handlers::categories::routes::<R>())
        .merge(handlers::quizzes::routes::<R>())
        .method_not_allowed_fallback(rejections::method_not_allowed)
        // Only matched routes answer preflights; unknown paths fall through to the JSON 404.
        .route_layer(cors())
        .fallback(rejections::not_found)
        .layer(CatchPanicLayer::custom(rejections::handler_panicked))
        .with_state(state)
}

fn cors() -> CorsLayer {
    // The quiz frontend sends a literal `true` header alongside its requests.
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("true"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}
