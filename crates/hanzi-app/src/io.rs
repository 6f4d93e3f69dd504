use std::io::{BufRead, Write};
use std::thread::JoinHandle;

use hanzi_core::{AppEvent, TextSource};
use kanal::AsyncSender;
use tokio::runtime::Handle;

/// Read queries from stdin on a plain thread.
///
/// A blocking stdin read cannot be cancelled, so it stays off the runtime and
/// does not hold up shutdown.
pub fn spawn_stdin_reader(
    prompt: Option<String>,
    event_tx: AsyncSender<AppEvent>,
) -> std::io::Result<JoinHandle<()>> {
    let runtime = Handle::current();

    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            let send = |event: AppEvent| -> anyhow::Result<()> {
                runtime.block_on(event_tx.send(event))?;
                Ok(())
            };

            if let Err(e) = read_input(stdin.lock(), prompt.as_deref(), send) {
                tracing::error!("Input reader stopped: {}", e);
            }
            tracing::info!("Input reader stopping");
        })
}

/// Turn input lines into events. Each line first clears any visible error,
/// then submits the line as a query. End of input closes the app.
pub fn read_input<R: BufRead>(
    reader: R,
    prompt: Option<&str>,
    mut send: impl FnMut(AppEvent) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    show_prompt(prompt);

    for line in reader.lines() {
        let text = line?;
        send(AppEvent::InputChanged)?;
        send(AppEvent::TextInput {
            text,
            source: TextSource::Keyboard,
        })?;
        show_prompt(prompt);
    }

    send(AppEvent::InputClosed)
}

fn show_prompt(prompt: Option<&str>) {
    if let Some(prompt) = prompt {
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "{prompt}");
        let _ = stdout.flush();
    }
}
