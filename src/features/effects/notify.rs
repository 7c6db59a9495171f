//! Desktop notifications.

use notify_rust::Notification;

use crate::error::StudyTimerError;
use crate::features::effects::Notifier;

/// Shows notifications through the desktop notification service.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self {
            app_name: "studytimer".to_string(),
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), StudyTimerError> {
        Notification::new()
            .summary(title)
            .body(body)
            .appname(&self.app_name)
            .icon("alarm-clock")
            .show()
            .map(|_| ())
            .map_err(|e| StudyTimerError::Notification(e.to_string()))
    }
}

/// Notifier that does nothing. Used with `--quiet`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str) -> Result<(), StudyTimerError> {
        Ok(())
    }
}
