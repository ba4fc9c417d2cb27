use unmutte::app::App;
use unmutte::cli::{parse_args, run_cli_command, CliCommand};
use unmutte::config::ClientConfig;
use unmutte::logging::init_logging;
use unmutte::terminal::{install_panic_hook, TerminalManager};
use unmutte::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

/// Frame tick; drives spinners and bounds redraw latency.
const FRAME_TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Flags are handled before any terminal setup
    let backend_url = match parse_args(std::env::args()) {
        CliCommand::Run { backend_url } => backend_url,
        other => std::process::exit(run_cli_command(&other)),
    };

    color_eyre::install()?;

    let (mut config, ignored_env) = ClientConfig::from_env();
    if let Some(url) = backend_url {
        config = config.with_backend_url(url);
    }

    // Logging problems must not keep anyone from venting
    match init_logging(&config) {
        Ok(path) => tracing::debug!("logging to {}", path.display()),
        Err(e) => eprintln!("warning: logging disabled: {}", e),
    }
    for var in &ignored_env {
        tracing::warn!("Ignoring invalid {}", var);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    install_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let mut app = App::from_config(&config);
        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore();
        result
    });

    if let Err(e) = &result {
        tracing::error!("exiting with error: {}", e);
    }
    tracing::info!("unmutte exited");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let Some(mut message_rx) = app.message_rx.take() else {
        return Err(color_eyre::eyre::eyre!("message receiver already taken"));
    };

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(FRAME_TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("terminal event error: {}", e);
                        return Err(e.into());
                    }
                    // Input stream closed
                    None => app.quit(),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
