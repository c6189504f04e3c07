//! Seeding orchestration.
//!
//! A [`SeedRequest`] is validated into a [`SeedPlan`] without touching any
//! backend. A [`SeedSession`] then drives the selected backend through
//! connect, optional clear, table creation, generation, optional
//! normalization, batched inserts and the final count, and returns a
//! [`SeedReport`].

mod error;
mod progress;
mod report;
mod session;

pub use error::SeedError;
pub use progress::{ConsoleProgress, NoProgress, ProgressSink, ProgressUpdate, BAR_WIDTH};
pub use report::SeedReport;
pub use session::{SeedPlan, SeedSession, SessionState};

use crate::backends::{BackendConfig, BackendKind};
use crate::config::window::resolve_window;
use seed_core::{registry::get_schema, Schema};
use tracing::info;

pub use seed_backend::DEFAULT_BATCH_SIZE;

/// Default number of records per session.
pub const DEFAULT_COUNT: usize = 1000;

/// What to seed, where, and how much.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRequest {
    /// Schema name
    pub schema: String,
    /// Backend name or alias
    pub backend: String,
    pub count: usize,
    pub batch_size: usize,
    /// Window start, `YYYY-MM-DD`
    pub start: Option<String>,
    /// Window end, `YYYY-MM-DD`
    pub end: Option<String>,
    pub normalize: bool,
    pub clear: bool,
    /// Fixed seed; random when absent
    pub seed: Option<u64>,
}

impl SeedRequest {
    pub fn new(schema: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            backend: backend.into(),
            count: DEFAULT_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
            start: None,
            end: None,
            normalize: false,
            clear: false,
            seed: None,
        }
    }
}

/// Check a request and turn it into a plan. Performs no I/O.
pub fn validate(
    request: &SeedRequest,
) -> Result<(&'static Schema, BackendKind, SeedPlan), SeedError> {
    let schema = get_schema(&request.schema)?;
    let kind = BackendKind::resolve(&request.backend)?;

    let window = resolve_window(request.start.as_deref(), request.end.as_deref())?;
    let seed = request.seed.unwrap_or_else(rand::random::<u64>);

    let plan = SeedPlan {
        count: request.count,
        batch_size: request.batch_size,
        window,
        normalize: request.normalize,
        clear: request.clear,
        seed,
    };
    plan.check()?;
    Ok((schema, kind, plan))
}

/// Validate `request`, then run one session against the selected backend.
pub async fn run_seed(
    request: &SeedRequest,
    config: &BackendConfig,
    progress: &mut dyn ProgressSink,
) -> Result<SeedReport, SeedError> {
    let (schema, kind, plan) = validate(request)?;
    info!(
        "Seeding {} records of '{}' into {} (window {} to {})",
        plan.count,
        schema.name,
        kind,
        plan.window.start(),
        plan.window.end()
    );

    let mut session = SeedSession::new(config.create(kind), schema, plan);
    session.run(progress).await
}
