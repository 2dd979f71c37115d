pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{category_id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{question_id}";
pub const SEARCH_QUESTIONS_URL: &str = "/questions/search";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn category_questions_url(category_id: i32) -> String {
    format!("/categories/{category_id}/questions")
}

pub fn question_url(question_id: i32) -> String {
    format!("/questions/{question_id}")
}

// Pagination
pub const DEFAULT_PAGE_SIZE: usize = 10;

// Quiz
pub const ALL_CATEGORIES: i32 = 0;
pub const ALL_CATEGORIES_TOKEN: &str = "all";

// Question validation
pub const MIN_DIFFICULTY: i32 = 0;
pub const MAX_DIFFICULTY: i32 = 5;
