use crate::error::{AppError, DateWarning};
use crate::model::{Category, Task, parse_date};
use time::{Date, OffsetDateTime, UtcOffset};

/// Result of [`TaskStore::add`]: the inserted task plus the date fallback notice, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub task: Task,
    pub warning: Option<DateWarning>,
}

/// Pending tasks ordered by due date, and completed tasks in completion order.
///
/// Every operation that changes membership of the pending list re-sorts it,
/// so [`TaskStore::pending`] and [`TaskStore::top_suggestion`] never observe a
/// stale order. Access is exclusive through `&mut self`; hosts that share a
/// store across threads have to put it behind a lock.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    pending: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: Category, title: &str, due_date_text: &str) -> Added {
        self.add_on(category, title, due_date_text, today())
    }

    /// Same as [`TaskStore::add`] with an explicit fallback date for unparsable input.
    pub fn add_on(
        &mut self,
        category: Category,
        title: &str,
        due_date_text: &str,
        today: Date,
    ) -> Added {
        let (due_date, warning) = match parse_date(due_date_text) {
            Some(date) => (date, None),
            None => {
                tracing::warn!(input = due_date_text, "unparsable due date, using today");
                let warning = DateWarning {
                    input: due_date_text.trim().to_string(),
                    fallback: today,
                };
                (today, Some(warning))
            }
        };

        let task = Task::new(category, title.trim(), due_date);
        tracing::debug!(task = %task, "adding task");
        self.pending.push(task.clone());
        self.sort();

        Added { task, warning }
    }

    pub fn delete(&mut self, index: usize) -> Result<Task, AppError> {
        self.check_index(index)?;
        let removed = self.pending.remove(index);
        tracing::debug!(index, task = %removed, "deleted task");
        Ok(removed)
    }

    pub fn complete(&mut self, index: usize) -> Result<Task, AppError> {
        self.check_index(index)?;
        let task = self.pending.remove(index);
        tracing::debug!(index, task = %task, "completed task");
        self.completed.push(task.clone());
        Ok(task)
    }

    /// Stable sort by due date only; equal dates keep their insertion order.
    pub fn sort(&mut self) {
        self.pending.sort_by_key(|task| task.due_date);
    }

    pub fn sorted_pending(&mut self) -> &[Task] {
        self.sort();
        &self.pending
    }

    pub fn top_suggestion(&self) -> Option<&Task> {
        self.pending.first()
    }

    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), AppError> {
        if index < self.pending.len() {
            Ok(())
        } else {
            Err(AppError::index_out_of_range(index, self.pending.len()))
        }
    }
}

fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Today's date in the local time zone, falling back to UTC when the offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_utc().to_offset(local_offset()).date()
}

#[cfg(test)]
mod tests {
    use super::{TaskStore, today};
    use crate::error::AppError;
    use crate::model::{Category, Task};
    use time::Date;
    use time::macros::date;

    const FALLBACK: Date = date!(2025 - 06 - 04);

    fn store_with(entries: &[(&str, &str)]) -> TaskStore {
        let mut store = TaskStore::new();
        for (title, due) in entries {
            store.add_on(Category::Work, title, due, FALLBACK);
        }
        store
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.title.as_str()).collect()
    }

    #[test]
    fn add_keeps_pending_sorted_by_due_date() {
        let store = store_with(&[
            ("late", "2025-09-01"),
            ("early", "2025-01-15"),
            ("middle", "2025-05-20"),
        ]);

        assert_eq!(titles(store.pending()), vec!["early", "middle", "late"]);
        assert!(
            store
                .pending()
                .windows(2)
                .all(|pair| pair[0].due_date <= pair[1].due_date)
        );
    }

    #[test]
    fn equal_dates_keep_insertion_order() {
        let store = store_with(&[
            ("first", "2025-03-01"),
            ("other", "2025-01-01"),
            ("second", "2025-03-01"),
            ("third", "2025-03-01"),
        ]);

        assert_eq!(
            titles(store.pending()),
            vec!["other", "first", "second", "third"]
        );
    }

    #[test]
    fn stability_survives_interleaved_mutations() {
        let mut store = store_with(&[
            ("a", "2025-03-01"),
            ("b", "2025-03-01"),
            ("x", "2025-02-01"),
            ("c", "2025-03-01"),
        ]);

        store.complete(0).unwrap();
        store.add_on(Category::Study, "d", "2025-03-01", FALLBACK);
        store.delete(1).unwrap();
        store.add_on(Category::Study, "e", "2025-03-01", FALLBACK);

        assert_eq!(titles(store.pending()), vec!["a", "c", "d", "e"]);
    }

    #[test]
    fn single_task_is_top_suggestion() {
        let mut store = TaskStore::new();
        let added = store.add(Category::Study, "Read", "2099-01-01");

        assert!(added.warning.is_none());
        assert_eq!(added.task.due_date, date!(2099 - 01 - 01));
        assert_eq!(store.top_suggestion(), Some(&added.task));
    }

    #[test]
    fn top_suggestion_is_none_when_empty() {
        let mut store = TaskStore::new();
        assert!(store.top_suggestion().is_none());

        store.add_on(Category::Work, "only", "2025-01-01", FALLBACK);
        store.delete(0).unwrap();
        assert!(store.top_suggestion().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn unparsable_date_falls_back_with_warning() {
        let mut store = TaskStore::new();
        let added = store.add_on(Category::Personal, "Walk", "not-a-date", FALLBACK);

        assert_eq!(added.task.due_date, FALLBACK);
        assert_eq!(store.pending().len(), 1);
        let warning = added.warning.expect("date warning");
        assert_eq!(warning.code(), "invalid_date");
        assert_eq!(warning.input, "not-a-date");
        assert_eq!(warning.fallback, FALLBACK);
    }

    #[test]
    fn unparsable_date_uses_current_date() {
        let mut store = TaskStore::new();
        let before = today();
        let added = store.add(Category::Personal, "Walk", "not-a-date");
        let after = today();

        assert!(added.warning.is_some());
        assert!(added.task.due_date == before || added.task.due_date == after);
    }

    #[test]
    fn complete_moves_task_to_completed() {
        let mut store = store_with(&[
            ("one", "2025-01-01"),
            ("two", "2025-01-02"),
            ("three", "2025-01-03"),
        ]);
        let original = store.pending()[1].clone();

        let moved = store.complete(1).unwrap();

        assert_eq!(moved, original);
        assert_eq!(store.pending().len(), 2);
        assert_eq!(store.completed(), &[original]);
        assert_eq!(store.completed_count(), 1);
        assert!(!store.pending().contains(&moved));
    }

    #[test]
    fn completed_keeps_completion_order() {
        let mut store = store_with(&[("one", "2025-01-01"), ("two", "2025-01-02")]);

        store.complete(1).unwrap();
        store.complete(0).unwrap();

        assert_eq!(titles(store.completed()), vec!["two", "one"]);
        assert_eq!(store.completed_count(), 2);
    }

    #[test]
    fn delete_leaves_completed_untouched() {
        let mut store = store_with(&[("one", "2025-01-01"), ("two", "2025-01-02")]);
        store.complete(0).unwrap();

        let removed = store.delete(0).unwrap();

        assert_eq!(removed.title, "two");
        assert!(store.pending().is_empty());
        assert_eq!(store.completed_count(), 1);
        assert_eq!(store.completed()[0].title, "one");
    }

    #[test]
    fn out_of_range_index_is_rejected_without_changes() {
        let mut store = store_with(&[("one", "2025-01-01")]);

        let err = store.complete(3).unwrap_err();
        assert_eq!(err, AppError::index_out_of_range(3, 1));
        assert_eq!(err.code(), "index_out_of_range");

        let err = store.delete(1).unwrap_err();
        assert_eq!(err.code(), "index_out_of_range");

        assert_eq!(store.pending().len(), 1);
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut store = store_with(&[
            ("b", "2025-02-01"),
            ("a", "2025-01-01"),
            ("c", "2025-02-01"),
        ]);

        store.sort();
        let once = store.pending().to_vec();
        store.sort();

        assert_eq!(store.pending(), once.as_slice());
        assert_eq!(store.sorted_pending(), once.as_slice());
    }

    #[test]
    fn add_trims_title() {
        let mut store = TaskStore::new();
        let added = store.add_on(Category::Shopping, "  Milk  ", "2025-01-01", FALLBACK);
        assert_eq!(added.task.title, "Milk");
    }
}
