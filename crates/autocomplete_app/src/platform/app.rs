use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use autocomplete_engine::{AutoComplete, FetchSettings, ReqwestTransport};
use tokio::io::{AsyncBufReadExt, BufReader};
use widget_logging::{widget_info, widget_warn};

use super::config::{load_config, DEFAULT_CONFIG_FILENAME};
use super::ui::render::{render, RenderStyle};

/// Runs the terminal host. Every stdin line is the new full value of the input box.
pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
    let host = load_config(&config_path)?;
    widget_logging::initialize(
        host.log_destination.into(),
        log::LevelFilter::Info,
        &host.log_file,
    );

    let widget_config = host.widget_config()?;
    let transport = ReqwestTransport::new(FetchSettings::default())
        .map_err(|err| anyhow::anyhow!("failed to build http client: {err}"))?;
    let style = RenderStyle { ansi: host.ansi };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    runtime.block_on(async move {
        let widget = AutoComplete::new(widget_config, Arc::new(transport))?;
        widget_info!("Widget ready endpoint={}", host.api_endpoint);
        event_loop(widget, style).await
    })
}

async fn event_loop(mut widget: AutoComplete, style: RenderStyle) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    paint(&widget, style)?;

    loop {
        tokio::select! {
            line = lines.next_line() => match line.context("failed to read stdin")? {
                Some(text) => widget.handle_input(text),
                None => break,
            },
            () = widget.next_update() => {
                if widget.consume_dirty() {
                    paint(&widget, style)?;
                }
            }
        }
    }

    // Input closed: let the last query finish before exiting.
    loop {
        widget.process_pending();
        if widget.consume_dirty() {
            paint(&widget, style)?;
        }
        if widget.is_idle() {
            break;
        }
        widget.next_update().await;
    }
    Ok(())
}

fn paint(widget: &AutoComplete, style: RenderStyle) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in render(&widget.view(), style) {
        if let Err(err) = writeln!(stdout, "{line}") {
            widget_warn!("Failed to write to stdout: {}", err);
            return Err(err.into());
        }
    }
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
