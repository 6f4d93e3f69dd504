use hanzi_core::LookupError;
use hanzi_core::dictionary::Dictionary;
use hanzi_core::state::LoadStatus;
use hanzi_core::{TextSource, UiEvent};
use hanzi_lang_chinese::SharedDataset;
use hanzi_ui::messages::lookup_error_message;

/// Resolve one submitted query into the signal for the result area
pub fn search(dataset: &SharedDataset, status: &LoadStatus, text: &str, source: TextSource) -> UiEvent {
    tracing::debug!("Search from {:?}: '{}'", source, text);

    match dataset.lookup(text) {
        Ok(record) => {
            tracing::info!("Found {} ({})", record.simplified_form, record.pronunciation);
            UiEvent::ShowRecord(record.clone())
        }
        Err(e) => {
            tracing::info!("Lookup failed: {}", e);
            UiEvent::ShowError {
                reason: lookup_error_message(&e, status).to_string(),
                // A miss replaces the card, other failures leave it in place
                hide_card: matches!(e, LookupError::NotFound(_)),
            }
        }
    }
}
