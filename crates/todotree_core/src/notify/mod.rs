use crate::error::AppError;
use crate::model::Task;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::LinuxNotifier;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WindowsNotifier;

pub const APP_NAME: &str = "todotree";
const DISABLE_ENV_VAR: &str = "TODOTREE_DISABLE_NOTIFICATIONS";

/// Feedback shown after a task is marked done.
pub trait Notifier {
    fn celebrate(&self, task: &Task) -> Result<(), AppError>;
}

pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn celebrate(&self, _task: &Task) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn celebration_body(task: &Task) -> String {
    format!("Great job! Task completed: {}", task.title)
}

pub fn notifier_from_env() -> Box<dyn Notifier> {
    if std::env::var_os(DISABLE_ENV_VAR).is_some() {
        return Box::new(NoopNotifier);
    }

    match platform_notifier() {
        Ok(notifier) => notifier,
        Err(err) => {
            tracing::debug!(error = %err, "desktop notifications unavailable");
            Box::new(NoopNotifier)
        }
    }
}

#[cfg(target_os = "linux")]
pub fn platform_notifier() -> Result<Box<dyn Notifier>, AppError> {
    Ok(Box::new(LinuxNotifier))
}

#[cfg(windows)]
pub fn platform_notifier() -> Result<Box<dyn Notifier>, AppError> {
    Ok(Box::new(WindowsNotifier))
}

#[cfg(not(any(target_os = "linux", windows)))]
pub fn platform_notifier() -> Result<Box<dyn Notifier>, AppError> {
    Err(AppError::invalid_data(
        "notifications are not supported on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::{NoopNotifier, Notifier, celebration_body};
    use crate::model::{Category, Task};
    use time::macros::date;

    #[test]
    fn celebration_body_names_the_task() {
        let task = Task::new(Category::Work, "Clear inbox", date!(2025 - 06 - 04));
        assert_eq!(
            celebration_body(&task),
            "Great job! Task completed: Clear inbox"
        );
    }

    #[test]
    fn noop_notifier_always_succeeds() {
        let task = Task::new(Category::Work, "Clear inbox", date!(2025 - 06 - 04));
        assert!(NoopNotifier.celebrate(&task).is_ok());
    }
}
