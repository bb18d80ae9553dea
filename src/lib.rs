//! ip_tracker library: geolocation lookup for IP addresses and domains
//!
//! This library provides the core of a small lookup tool: a query
//! classifier, a timezone offset formatter, provider adapters that
//! normalize different geolocation APIs into one record, and a display
//! tracker that owns the current panel state.
//!
//! # Example
//!
//! ```no_run
//! use ip_tracker::{run_lookups, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     queries: vec!["8.8.8.8".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_lookups(config).await?;
//! println!("{} of {} lookups succeeded", report.successful, report.submissions);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
mod error_handling;
pub mod geo;
pub mod initialization;
mod output;
pub mod timezone;
pub mod tracker;

// Re-export public API
pub use classify::{classify, ClassificationResult};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{InitializationError, LookupError, OffsetError};
pub use geo::{fetch_geolocation, Endpoint, GeolocationRecord, Provider};
pub use output::{print_panel, render_json, render_panel};
pub use run::{run_lookups, LookupReport};
pub use timezone::{display_offset, format_offset};

// Internal run module (contains the submission loop)
mod run {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use chrono::Utc;
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{debug, info, warn};
    use tokio::io::{stdin, AsyncBufReadExt, BufReader};

    use crate::classify::{classify, ClassificationResult};
    use crate::config::{Config, OutputFormat};
    use crate::geo::{fetch_geolocation, Endpoint, GeolocationRecord};
    use crate::initialization::init_client;
    use crate::output::{print_panel, render_json};
    use crate::tracker::{CommitOutcome, TrackerState};

    /// Results of a lookup run.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Total number of submissions processed (including rejected input)
        pub submissions: usize,
        /// Number of submissions that produced a displayed record
        pub successful: usize,
        /// Number of submissions rejected or failed
        pub failed: usize,
        /// The record on display when the run ended, if any
        pub last_record: Option<GeolocationRecord>,
    }

    /// Shared resources for one run, handed to every submission task.
    struct SubmissionContext {
        client: Arc<reqwest::Client>,
        endpoint: Endpoint,
        tracker: TrackerState,
        output: OutputFormat,
        successful: AtomicUsize,
        failed: AtomicUsize,
    }

    /// Runs lookups for the configured queries.
    ///
    /// This is the main entry point for the library. Queries come from the
    /// configuration; the single value `"-"` switches to reading them
    /// line-by-line from stdin, and an empty query list performs one self
    /// lookup (the initial-load behavior).
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The provider endpoint cannot be resolved (e.g. missing API key)
    /// - The HTTP client cannot be initialized
    /// - Stdin cannot be read (stdin mode only)
    ///
    /// Individual lookup failures do not abort the run; they are tracked in
    /// the report and surfaced on the display.
    pub async fn run_lookups(config: Config) -> Result<LookupReport> {
        let endpoint =
            Endpoint::from_config(&config).context("Failed to resolve provider endpoint")?;
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        info!("Using provider: {}", endpoint.provider());

        let ctx = Arc::new(SubmissionContext {
            client,
            endpoint,
            tracker: TrackerState::new(),
            output: config.output,
            successful: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        });

        let is_stdin = config.queries.len() == 1 && config.queries[0] == "-";
        let mut submissions = 0usize;

        if is_stdin {
            info!("Reading queries from stdin");
            // Each line is a submission. Lookups are spawned rather than
            // awaited so a slow response cannot block the next submission;
            // the tracker's sequence numbers decide which response lands.
            let mut tasks = FuturesUnordered::new();
            let mut lines = BufReader::new(stdin()).lines();
            loop {
                let line = match lines.next_line().await {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        warn!("Failed to read line from stdin: {e}");
                        break;
                    }
                };
                let trimmed = line.trim();
                if trimmed.starts_with('#') {
                    continue;
                }
                submissions += 1;
                let ctx = Arc::clone(&ctx);
                let query = trimmed.to_string();
                tasks.push(tokio::spawn(async move {
                    process_submission(&query, &ctx).await;
                }));
            }
            while let Some(task_result) = tasks.next().await {
                if let Err(join_error) = task_result {
                    ctx.failed.fetch_add(1, Ordering::SeqCst);
                    warn!("Submission task panicked: {:?}", join_error);
                }
            }
        } else {
            // Argument mode: successive submissions against the same
            // display state, one in flight at a time
            let queries = if config.queries.is_empty() {
                vec![String::new()]
            } else {
                config.queries.clone()
            };
            for query in queries {
                submissions += 1;
                process_submission(query.trim(), &ctx).await;
            }
        }

        Ok(LookupReport {
            submissions,
            successful: ctx.successful.load(Ordering::SeqCst),
            failed: ctx.failed.load(Ordering::SeqCst),
            last_record: ctx.tracker.snapshot().record,
        })
    }

    /// Processes one submission end to end: classify, fetch, commit, render.
    async fn process_submission(query: &str, ctx: &SubmissionContext) {
        // Empty input is a deliberate bypass: it resets to the default
        // display (a self lookup), so it never reaches the classifier
        let kind = if query.is_empty() {
            ClassificationResult::Empty
        } else {
            classify(query)
        };

        if !kind.is_lookupable() {
            warn!("Rejected input '{query}'");
            ctx.failed.fetch_add(1, Ordering::SeqCst);
            ctx.tracker.reject_input();
            if ctx.output == OutputFormat::Panel {
                print_panel(&ctx.tracker.snapshot(), Utc::now());
            }
            return;
        }

        debug!("Classified '{query}' as {kind}");
        let seq = ctx.tracker.begin_submission();
        let result = fetch_geolocation(&ctx.client, &ctx.endpoint, query, kind).await;
        let succeeded = result.is_ok();

        match ctx.tracker.commit(seq, result) {
            CommitOutcome::Applied => {
                if succeeded {
                    ctx.successful.fetch_add(1, Ordering::SeqCst);
                } else {
                    ctx.failed.fetch_add(1, Ordering::SeqCst);
                }
                let state = ctx.tracker.snapshot();
                match ctx.output {
                    OutputFormat::Panel => print_panel(&state, Utc::now()),
                    OutputFormat::Json => {
                        if succeeded {
                            if let Some(record) = &state.record {
                                match render_json(record) {
                                    Ok(json) => println!("{json}"),
                                    Err(e) => warn!("Failed to serialize record: {e}"),
                                }
                            }
                        }
                    }
                }
            }
            CommitOutcome::Stale => {
                debug!("Submission '{query}' superseded before its response arrived");
            }
        }
    }
}
