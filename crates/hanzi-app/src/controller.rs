use std::sync::Arc;
use std::time::Duration;

use hanzi_core::AppEvent;
use hanzi_core::dictionary::DatasetSource;
use hanzi_core::state::AppState;
use hanzi_lang_chinese::SharedDataset;
use hanzi_ui::{Presenter, ui_loop};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::events::load::load_dataset;

/// Centralized channel management
pub struct ChannelSet {
    pub to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            to_app: kanal::bounded_async(64),     // typed queries + load result
            app_to_ui: kanal::bounded_async(64),  // render signals + dismiss timers
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    dataset: Arc<SharedDataset>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            dataset: Arc::new(SharedDataset::new()),
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sender for input events (queries, edits, end of input)
    pub fn input_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.to_app.0.clone()
    }

    pub fn dataset(&self) -> Arc<SharedDataset> {
        self.dataset.clone()
    }

    pub fn spawn_tasks<P: Presenter + 'static>(
        &self,
        source: Box<dyn DatasetSource>,
        presenter: P,
        error_display: Duration,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // One-time dataset load
        tasks.spawn(load_dataset(
            self.state.clone(),
            self.dataset.clone(),
            source,
            self.channels.to_app.0.clone(),
        ));

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.dataset.clone(),
            self.channels.to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        // UI loop, its end marks the end of the session
        let app_to_ui_rx = self.channels.app_to_ui.1.clone();
        let app_to_ui_tx = self.channels.app_to_ui.0.clone();
        let done = self.cancel_token.clone();
        tasks.spawn(async move {
            let result = ui_loop(app_to_ui_rx, app_to_ui_tx, error_display, presenter).await;
            done.cancel();
            result.map(|_| ())
        });

        tasks
    }

    /// Resolves once the session ends or shutdown is requested
    pub async fn finished(&self) {
        self.cancel_token.cancelled().await;
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
