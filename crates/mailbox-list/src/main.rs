//! `mailbox-list` - headless host for the selectable mailbox list.
//!
//! Loads a mailbox (a JSON fixture or the built-in one) on a background task,
//! feeds it to the screen over a channel and prints every redrawn row.
//!
//! Usage: `mailbox-list [FIXTURE.json]`

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod screen;
mod settings;
mod source;
mod view;

use std::path::PathBuf;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use screen::{MailboxScreen, RenderedRow};
use settings::AppSettings;
use source::MailboxFixture;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings_path = settings::settings_path();
    let loaded = settings::load_settings(&settings_path).await;
    let log_filter = loaded
        .as_ref()
        .map_or(settings::DEFAULT_LOG_FILTER, |s| s.log_filter.as_str())
        .to_string();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mailbox-list");

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "Falling back to default settings");
            AppSettings::default()
        }
    };
    if !settings_path.exists() {
        match settings::save_settings(&settings_path, &settings).await {
            Ok(()) => info!(path = %settings_path.display(), "Wrote default settings"),
            Err(e) => warn!(error = %e, "Could not write default settings"),
        }
    }

    let fixture = match std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.fixture.clone())
    {
        Some(path) => source::load_fixture(&path).await?,
        None => MailboxFixture::mock(),
    };

    let (tx, mut rx) = mpsc::channel(16);
    let feeder = tokio::spawn(source::feed(fixture, tx));

    let mut screen = MailboxScreen::new(settings.location);
    println!("== {}", settings.location.display_name());
    print_rows(&screen.render_all());

    while let Some(message) = rx.recv().await {
        let rows = screen.update(message);
        print_rows(&rows);
        if screen.action_bar_visible() {
            println!("-- {}", screen.action_bar_title());
        }
        if let Some(error) = screen.error_message() {
            println!("!! {error}");
        }
    }

    feeder.await.context("data source task panicked")??;

    info!(
        items = screen.list().items().len(),
        selected = screen.list().selection().len(),
        opened = ?screen.opened_item(),
        "Mailbox drained"
    );
    Ok(())
}

fn print_rows(rows: &[RenderedRow]) {
    for row in rows {
        println!("{}", row.text);
    }
}
