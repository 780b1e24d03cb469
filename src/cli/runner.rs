//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::FeedConfig;
use crate::error::Result;
use crate::observer::Viewport;
use crate::output::RecordWriter;
use crate::pagination::{ItemStore, LoadOutcome, PaginationController};
use crate::source::{DataSource, HttpDataSource};
use futures::channel::mpsc;
use std::io::{IsTerminal, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Browse { rows } => {
                let input = BufReader::new(tokio::io::stdin());
                self.browse(*rows, input, std::io::stdout()).await
            }
            Commands::Fetch { pages } => self.fetch(*pages, std::io::stdout()).await,
            Commands::Config => self.show_config(std::io::stdout()),
        }
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn feed_config(&self) -> Result<FeedConfig> {
        let mut config = match &self.cli.config {
            Some(path) => FeedConfig::from_file(path)?,
            None => FeedConfig::default(),
        };
        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }
        config.validate()?;
        Ok(config)
    }

    /// Build a controller over the configured listing endpoint
    fn controller(&self) -> Result<Arc<PaginationController>> {
        let config = self.feed_config()?;
        let source: Arc<dyn DataSource> = Arc::new(HttpDataSource::from_config(&config)?);
        let controller = PaginationController::new(source, ItemStore::new())
            .with_start_page(config.start_page)
            .with_threshold(config.observer.threshold);
        Ok(Arc::new(controller))
    }

    /// Make `pages` load attempts and print records as they arrive
    pub async fn fetch<W: Write>(&self, pages: u32, out: W) -> Result<()> {
        let controller = self.controller()?;
        let store = controller.store();
        let mut writer = RecordWriter::new(out, self.cli.format);

        for _ in 0..pages {
            let before = store.len().await;
            if let LoadOutcome::Loaded { count, .. } = controller.load_more().await {
                let records = store.slice(before, before + count).await;
                writer.write_all(before, &records)?;
            }
        }
        writer.flush()?;

        let stats = controller.stats();
        info!(
            pages = stats.pages_loaded,
            records = stats.items_loaded,
            failures = stats.failures,
            "Fetch finished"
        );
        Ok(())
    }

    /// Interactive list; the row after the last record is the bottom sentinel
    pub async fn browse<R, W>(&self, rows: usize, input: R, out: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let controller = self.controller()?;
        let store = controller.store().clone();
        let (sentinel_tx, sentinel_rx) = mpsc::unbounded();
        let observer = controller.observe_bottom(sentinel_rx);

        let mut viewport = Viewport::new(rows);
        let mut writer = RecordWriter::new(out, self.cli.format);
        let mut lengths = store.subscribe();
        let mut lines = input.lines();
        let clear = std::io::stdout().is_terminal();

        loop {
            let len = store.len().await;
            render(&mut writer, &store, &viewport, &controller, clear).await?;
            if sentinel_tx.unbounded_send(viewport.sentinel(len)).is_err() {
                warn!("Bottom observer stopped");
            }

            tokio::select! {
                changed = lengths.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match line.trim() {
                        "q" => break,
                        "k" => viewport.page_up(),
                        "r" => {
                            debug!("Manual reload requested");
                            let controller = Arc::clone(&controller);
                            tokio::spawn(async move {
                                controller.load_more().await;
                            });
                        }
                        _ => viewport.page_down(len),
                    }
                }
            }
        }

        observer.disconnect();
        writer.flush()?;
        Ok(())
    }

    /// Print the effective configuration
    pub fn show_config<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = RecordWriter::new(out, self.cli.format);
        writer.line(self.feed_config()?.to_yaml()?.trim_end())?;
        writer.flush()
    }
}

async fn render<W: Write>(
    writer: &mut RecordWriter<W>,
    store: &ItemStore,
    viewport: &Viewport,
    controller: &PaginationController,
    clear: bool,
) -> Result<()> {
    let len = store.len().await;
    let visible = viewport.visible_rows(len);
    let records = store.slice(visible.start, visible.end).await;

    if clear {
        writer.line("\x1b[2J\x1b[H")?;
    }
    writer.line(&format!(
        "-- {} | next page {}{} --",
        position_label(&visible, len),
        controller.page(),
        if controller.is_loading() { " | loading" } else { "" },
    ))?;
    writer.write_all(visible.start, &records)?;
    if visible.end == len {
        writer.line("   ... (scroll to load more, r to retry, q to quit)")?;
    }
    writer.flush()
}

fn position_label(visible: &std::ops::Range<usize>, len: usize) -> String {
    if visible.is_empty() {
        format!("0 of {len}")
    } else {
        format!("{}-{} of {len}", visible.start + 1, visible.end)
    }
}
