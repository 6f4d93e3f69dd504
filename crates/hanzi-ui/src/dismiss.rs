use std::time::Duration;

use hanzi_core::{AppEvent, UiEvent};
use kanal::AsyncSender;
use tokio::task::JoinHandle;

/// Posts a `DismissError` back to the UI loop once the display window has passed
#[derive(Clone)]
pub struct DismissScheduler {
    delay: Duration,
    tx: AsyncSender<AppEvent>,
}

impl DismissScheduler {
    pub fn new(delay: Duration, tx: AsyncSender<AppEvent>) -> Self {
        Self { delay, tx }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&self, generation: u64) -> JoinHandle<()> {
        let tx = self.tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let event = AppEvent::UiEvent(UiEvent::DismissError { generation });
            if let Err(e) = tx.send(event).await {
                tracing::debug!("Dismiss timer for generation {} dropped: {}", generation, e);
            }
        })
    }
}
