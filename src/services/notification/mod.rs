use anyhow::Result;
use notify_rust::{Notification, Timeout};

use crate::services::alert::CompletionAlert;

const APP_NAME: &str = "Egg Timer";

/// Service for displaying system notifications.
///
/// Only registered when `system_notification` is on in the settings.
#[derive(Debug, Default)]
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        Self
    }

    pub fn completion_body(preset_name: &str) -> String {
        if preset_name.is_empty() {
            "Your timer is done".to_string()
        } else {
            format!("{} is ready", preset_name)
        }
    }

    /// Show a notification with the given body, blocking until the
    /// notification daemon answers
    fn show_blocking(body: &str) -> Result<()> {
        Notification::new()
            .appname(APP_NAME)
            .summary(APP_NAME)
            .body(body)
            .timeout(Timeout::Milliseconds(10000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl CompletionAlert for NotificationService {
    fn name(&self) -> &'static str {
        "desktop notification"
    }

    /// Hands the notification to a detached thread; on Linux `show` is a
    /// D-Bus round trip.
    fn fire(&self, preset_name: &str) -> Result<()> {
        let body = Self::completion_body(preset_name);
        std::thread::Builder::new()
            .name("completion-notification".to_string())
            .spawn(move || {
                if let Err(e) = Self::show_blocking(&body) {
                    log::warn!("{:#}", e);
                }
            })?;
        Ok(())
    }
}
