pub mod config;
pub mod error;
pub mod growth;
pub mod model;
pub mod notify;
pub mod suggestion;
pub mod task_store;

pub use error::{AppError, DateWarning};
pub use model::{Category, Task};
pub use suggestion::{Catalog, FALLBACK_SUGGESTION, SuggestionEngine};
pub use task_store::{Added, TaskStore};

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::{Category, SuggestionEngine, TaskStore};

    #[test]
    fn app_error_exposes_code_and_display() {
        let err = AppError::invalid_input("please fill all fields");
        assert_eq!(err.code(), "invalid_input");
        assert_eq!(err.to_string(), "invalid_input - please fill all fields");

        let err = AppError::index_out_of_range(4, 2);
        assert_eq!(
            err.to_string(),
            "index_out_of_range - no pending task at position 4 (pending has 2)"
        );
    }

    #[test]
    fn suggestion_does_not_touch_the_store() {
        let mut store = TaskStore::new();
        let engine = SuggestionEngine::builtin();

        let suggestion = engine.pick("Work").to_string();
        assert!(store.is_empty());

        let added = store.add(Category::Work, &suggestion, "2099-01-01");
        assert_eq!(store.top_suggestion(), Some(&added.task));
    }
}
