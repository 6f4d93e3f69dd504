use std::sync::Arc;

use clap::Parser;
use hanzi_config::Config;
use hanzi_core::dictionary::Dictionary;
use hanzi_core::state::{AppState, LoadStatus};
use hanzi_lang_chinese::{DatasetLocation, HanziLoader};
use hanzi_ui::messages::{load_error_message, lookup_error_message};
use hanzi_ui::{Presenter, TerminalPresenter};
use tokio::signal;
use tokio::task::JoinSet;

pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod logging;

use self::cli::Cli;
use self::controller::AppController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(Config::load(cli.config.as_deref())?);

    logging::init_tracing(&config);
    logging::install_panic_hook();

    let location = DatasetLocation::resolve(&config.dataset.origin, config.dataset.file_name());
    tracing::debug!("Dataset location: {:?}", location);

    if let Some(query) = cli.query.as_deref() {
        return run_once(location, query).await;
    }

    run(config, location).await
}

/// Interactive session: queries from stdin until end of input or Ctrl+C
pub async fn run(config: Config, location: DatasetLocation) -> anyhow::Result<()> {
    let error_display = config.ui.error_display();
    let prompt = atty::is(atty::Stream::Stdin).then(|| config.ui.prompt.clone());

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(
        location.into_source(),
        TerminalPresenter::stdout(),
        error_display,
    );

    // Detached on purpose, see `spawn_stdin_reader`
    let _reader = io::spawn_stdin_reader(prompt, controller.input_sender())?;

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
            }
            tracing::info!("Shutdown requested");
        }
        _ = controller.finished() => {
            tracing::info!("Session finished");
        }
    }

    controller.shutdown();
    tasks.abort_all();
    report_tasks(&mut tasks).await;

    Ok(())
}

/// Load, look up one query, print the result. Waits for the load to finish.
pub async fn run_once(location: DatasetLocation, query: &str) -> anyhow::Result<()> {
    let mut presenter = TerminalPresenter::stdout();
    let source = location.into_source();

    let parsed = match HanziLoader::load(source.as_ref()).await {
        Ok(parsed) => parsed,
        Err(e) => {
            presenter.show_error(load_error_message(&e));
            anyhow::bail!(e);
        }
    };

    let status = LoadStatus::Ready {
        records: parsed.dataset.len(),
    };

    match parsed.dataset.lookup(query) {
        Ok(record) => {
            presenter.show_record(record);
            Ok(())
        }
        Err(e) => {
            presenter.show_error(lookup_error_message(&e, &status));
            anyhow::bail!(e)
        }
    }
}

async fn report_tasks(tasks: &mut JoinSet<anyhow::Result<()>>) {
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Task failed: {:#}", e),
            Err(e) if e.is_cancelled() => {}
            Err(e) => tracing::error!("Task panicked: {}", e),
        }
    }
}

#[cfg(test)]
mod tests;
