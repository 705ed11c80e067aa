use crate::error::AppError;
use crate::model::Task;
use crate::notify::{APP_NAME, Notifier, celebration_body};
use tauri_winrt_notification::Toast;

pub struct WindowsNotifier;

impl Notifier for WindowsNotifier {
    fn celebrate(&self, task: &Task) -> Result<(), AppError> {
        Toast::new(Toast::POWERSHELL_APP_ID)
            .title(APP_NAME)
            .text1(&celebration_body(task))
            .text2(&task.to_string())
            .show()
            .map_err(|err| AppError::io(err.to_string()))?;
        Ok(())
    }
}
