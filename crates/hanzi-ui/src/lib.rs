use std::ops::ControlFlow;
use std::time::Duration;

use hanzi_core::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};

pub mod dismiss;
pub mod events;
pub mod messages;
pub mod presenter;
pub mod state;

pub use dismiss::DismissScheduler;
pub use presenter::{Presenter, TerminalPresenter};
pub use state::{ResultArea, Screen};

/// Drive the result area from backend events until `Close`.
///
/// `app_to_ui_tx` is the sending half of the same channel; dismiss timers
/// post back through it.
pub async fn ui_loop<P: Presenter>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    error_display: Duration,
    presenter: P,
) -> anyhow::Result<P> {
    let scheduler = DismissScheduler::new(error_display, app_to_ui_tx);
    let mut area = ResultArea::new(presenter);

    while let Ok(event) = app_to_ui_rx.recv().await {
        let AppEvent::UiEvent(event) = event else {
            tracing::warn!("[UI] Ignoring non-UI event: {:?}", event);
            continue;
        };

        if let ControlFlow::Break(()) = events::handle_event(&mut area, &scheduler, event) {
            tracing::debug!("[UI] Closing");
            break;
        }
    }

    Ok(area.into_presenter())
}

#[cfg(test)]
mod tests;
