use std::ops::ControlFlow;

use hanzi_core::UiEvent;

use crate::dismiss::DismissScheduler;
use crate::presenter::Presenter;
use crate::state::ResultArea;

pub fn handle_event<P: Presenter>(
    area: &mut ResultArea<P>,
    scheduler: &DismissScheduler,
    event: UiEvent,
) -> ControlFlow<()> {
    match event {
        UiEvent::ShowRecord(record) => {
            tracing::debug!("[UI] Showing card for {}", record.simplified_form);
            area.show_record(record);
        }
        UiEvent::ShowError { reason, hide_card } => {
            if hide_card {
                area.hide_card();
            }
            let generation = area.show_error(reason);
            scheduler.schedule(generation);
        }
        UiEvent::ClearError => area.clear_error(),
        UiEvent::DismissError { generation } => {
            if !area.dismiss_error(generation) {
                tracing::debug!("[UI] Ignoring stale dismissal (generation {})", generation);
            }
        }
        UiEvent::Close => return ControlFlow::Break(()),
    }

    ControlFlow::Continue(())
}
