use std::sync::Arc;

use hanzi_core::AppEvent;
use hanzi_core::dictionary::DatasetSource;
use hanzi_core::state::{AppState, LoadStatus};
use hanzi_lang_chinese::{HanziDataset, HanziLoader, SharedDataset};
use kanal::AsyncSender;

/// One-time dataset load. On failure an empty dataset is installed so every
/// later lookup resolves to `DatasetUnavailable`.
pub async fn load_dataset(
    state: Arc<AppState>,
    dataset: Arc<SharedDataset>,
    source: Box<dyn DatasetSource>,
    to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let loaded = HanziLoader::load(source.as_ref()).await;

    // Dataset and status change together for anyone holding the read lock
    let mut status = state.load_status.write().await;
    let event = match loaded {
        Ok(parsed) => {
            let records = parsed.dataset.len();
            dataset.install(parsed.dataset);
            *status = LoadStatus::Ready { records };
            AppEvent::DatasetReady { records }
        }
        Err(e) => {
            tracing::error!("Failed to load dataset: {}", e);
            dataset.install(HanziDataset::empty());
            *status = LoadStatus::Failed(e.clone());
            AppEvent::DatasetFailed(e)
        }
    };
    drop(status);

    to_app_tx.send(event).await?;
    Ok(())
}
