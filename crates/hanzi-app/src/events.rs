use std::ops::ControlFlow;
use std::sync::Arc;

use hanzi_core::state::AppState;
use hanzi_core::{AppEvent, UiEvent};
use hanzi_lang_chinese::SharedDataset;
use hanzi_ui::messages::load_error_message;
use kanal::{AsyncReceiver, AsyncSender};

pub mod load;
pub mod search;

use search::search;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    dataset: Arc<SharedDataset>,
    to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = to_app_rx.recv().await?;

        if handle_events(&state, &dataset, &app_to_ui_tx, event)
            .await?
            .is_break()
        {
            tracing::info!("[EVENT_LOOP] Input closed, stopping");
            return Ok(());
        }
    }
}

async fn handle_events(
    state: &AppState,
    dataset: &SharedDataset,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    match event {
        AppEvent::TextInput { text, source } => {
            // Held across the lookup: the loader installs under the write lock
            let status = state.load_status.read().await;
            let ui_event = search(dataset, &status, &text, source);
            drop(status);
            app_to_ui_tx.send(AppEvent::UiEvent(ui_event)).await?;
        }
        AppEvent::InputChanged => {
            app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::ClearError)).await?;
        }
        AppEvent::DatasetReady { records } => {
            tracing::info!("Dataset ready: {} records", records);
        }
        AppEvent::DatasetFailed(error) => {
            let ui_event = UiEvent::ShowError {
                reason: load_error_message(&error).to_string(),
                hide_card: false,
            };
            app_to_ui_tx.send(AppEvent::UiEvent(ui_event)).await?;
        }
        AppEvent::InputClosed => {
            app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            return Ok(ControlFlow::Break(()));
        }
        AppEvent::UiEvent(_) => {
            // UI-only event, ignore in backend
        }
    }

    Ok(ControlFlow::Continue(()))
}
