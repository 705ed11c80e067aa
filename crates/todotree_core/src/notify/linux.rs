use crate::error::AppError;
use crate::model::Task;
use crate::notify::{APP_NAME, Notifier, celebration_body};
use notify_rust::Notification;

pub struct LinuxNotifier;

impl Notifier for LinuxNotifier {
    fn celebrate(&self, task: &Task) -> Result<(), AppError> {
        Notification::new()
            .summary(APP_NAME)
            .body(&celebration_body(task))
            .show()
            .map_err(|err| AppError::io(err.to_string()))?;
        Ok(())
    }
}
