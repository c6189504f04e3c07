//! One seeding session against one backend.

use super::error::SeedError;
use super::progress::{ProgressSink, ProgressUpdate};
use super::report::SeedReport;
use seed_backend::Backend;
use seed_core::{Record, Schema, CUSTOMERS_TABLE, PRODUCTS_TABLE};
use seed_generator::{DateWindow, RecordGenerator};
use seed_normalizer::Normalizer;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Lifecycle of a [`SeedSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Validating,
    Connected,
    TablesCleared,
    TablesCreated,
    Generating,
    EntitiesInserted,
    RecordsInserted,
    Reported,
    Disconnected,
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Connected => "connected",
            Self::TablesCleared => "tables_cleared",
            Self::TablesCreated => "tables_created",
            Self::Generating => "generating",
            Self::EntitiesInserted => "entities_inserted",
            Self::RecordsInserted => "records_inserted",
            Self::Reported => "reported",
            Self::Disconnected => "disconnected",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Validated parameters of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedPlan {
    /// Records to generate
    pub count: usize,
    /// Records per insert batch
    pub batch_size: usize,
    /// Window for time fields
    pub window: DateWindow,
    /// Normalization requested
    pub normalize: bool,
    /// Drop target tables first
    pub clear: bool,
    /// Seed of the fake-data context
    pub seed: u64,
}

impl SeedPlan {
    /// Reject plans that would insert nothing.
    pub fn check(&self) -> Result<(), SeedError> {
        if self.count == 0 {
            return Err(SeedError::InvalidCount);
        }
        if self.batch_size == 0 {
            return Err(SeedError::InvalidBatchSize);
        }
        Ok(())
    }

    /// Number of insert batches.
    pub fn total_batches(&self) -> usize {
        self.count.div_ceil(self.batch_size.max(1))
    }
}

/// Drives a backend through connect, create, generate, insert and report.
pub struct SeedSession<'a> {
    backend: Box<dyn Backend>,
    schema: &'a Schema,
    plan: SeedPlan,
    state: SessionState,
    history: Vec<SessionState>,
}

impl<'a> SeedSession<'a> {
    pub fn new(backend: Box<dyn Backend>, schema: &'a Schema, plan: SeedPlan) -> Self {
        Self {
            backend,
            schema,
            plan,
            state: SessionState::Idle,
            history: vec![SessionState::Idle],
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Every state entered so far, in order.
    pub fn history(&self) -> &[SessionState] {
        &self.history
    }

    pub fn plan(&self) -> &SeedPlan {
        &self.plan
    }

    /// Give the backend back, e.g. to inspect it after the run.
    pub fn into_backend(self) -> Box<dyn Backend> {
        self.backend
    }

    fn transition(&mut self, next: SessionState) {
        debug!("Session state: {} -> {}", self.state, next);
        self.state = next;
        self.history.push(next);
    }

    /// Run the session to completion.
    ///
    /// The plan and the backend's capabilities are checked before anything
    /// is connected. Any later error moves the session to
    /// [`SessionState::Failed`]; the backend is still disconnected before the
    /// error is returned.
    pub async fn run(&mut self, progress: &mut dyn ProgressSink) -> Result<SeedReport, SeedError> {
        let started = Instant::now();
        self.transition(SessionState::Validating);

        let (normalized, warnings) = match self.validate() {
            Ok(checked) => checked,
            Err(e) => {
                self.transition(SessionState::Failed);
                return Err(e);
            }
        };

        match self.execute(progress, started, normalized, warnings).await {
            Ok(report) => {
                if let Err(e) = self.backend.disconnect().await {
                    warn!("Failed to disconnect from {}: {e}", self.backend.name());
                }
                self.transition(SessionState::Disconnected);
                Ok(report)
            }
            Err(e) => {
                self.transition(SessionState::Failed);
                if let Err(disconnect_err) = self.backend.disconnect().await {
                    debug!("Disconnect after failure also failed: {disconnect_err}");
                }
                Err(e)
            }
        }
    }

    /// Check the plan and settle the effective normalization mode.
    fn validate(&self) -> Result<(bool, Vec<String>), SeedError> {
        self.plan.check()?;

        let mut warnings = Vec::new();
        let mut normalized = self.plan.normalize;
        if normalized && !self.backend.supports_normalization() {
            let message = format!(
                "{} does not support normalization, inserting flat records",
                self.backend.name()
            );
            warn!("{message}");
            warnings.push(message);
            normalized = false;
        }
        Ok((normalized, warnings))
    }

    async fn execute(
        &mut self,
        progress: &mut dyn ProgressSink,
        started: Instant,
        normalized: bool,
        warnings: Vec<String>,
    ) -> Result<SeedReport, SeedError> {
        let schema = self.schema;
        let table = schema.target_table(normalized);

        progress.phase(&format!("Connecting to {}", self.backend.name()));
        self.backend.connect().await?;
        self.transition(SessionState::Connected);

        if self.plan.clear {
            progress.phase("Clearing existing data");
            self.clear_tables(&table, normalized).await;
            self.transition(SessionState::TablesCleared);
        }

        progress.phase("Creating tables");
        if normalized {
            self.backend.create_normalized_tables().await?;
        }
        self.backend.create_table(schema, normalized).await?;
        self.transition(SessionState::TablesCreated);

        info!(
            "Generating {} {} records (seed {}, batch size {})",
            self.plan.count, schema.name, self.plan.seed, self.plan.batch_size
        );
        self.transition(SessionState::Generating);

        let mut report = SeedReport {
            backend: self.backend.name().to_string(),
            schema: schema.name.clone(),
            table: table.clone(),
            normalized,
            seed: self.plan.seed,
            ..Default::default()
        };

        let mut generator = RecordGenerator::new(schema, self.plan.window, self.plan.seed);
        let total_batches = self.plan.total_batches();

        if normalized {
            progress.phase("Generating and normalizing records");
            let generation_started = Instant::now();
            let mut normalizer = Normalizer::new();
            let batches: Vec<Vec<Record>> = generator
                .generate_batches(self.plan.count, self.plan.batch_size)
                .map(|batch| {
                    batch
                        .into_iter()
                        .map(|record| normalizer.normalize_with(record, schema))
                        .collect::<Vec<Record>>()
                })
                .collect();
            report.generation_duration = generation_started.elapsed();

            report.customers = normalizer.customers().len();
            report.products = normalizer.products().len();
            if report.customers > 0 || report.products > 0 {
                progress.phase("Inserting customers and products");
                self.backend
                    .insert_normalized_entities(normalizer.customers(), normalizer.products())
                    .await?;
                info!(
                    "Created {} unique customers and {} unique products",
                    report.customers, report.products
                );
                self.transition(SessionState::EntitiesInserted);
            }

            progress.phase("Inserting records");
            for (index, batch) in batches.iter().enumerate() {
                self.insert_one(&mut report, batch, normalized).await?;
                progress.batch_done(&self.update(index, total_batches, report.inserted));
            }
        } else {
            progress.phase("Generating and inserting records");
            let mut batches = generator.generate_batches(self.plan.count, self.plan.batch_size);
            let mut index = 0;
            loop {
                let generation_started = Instant::now();
                let Some(batch) = batches.next() else {
                    break;
                };
                report.generation_duration += generation_started.elapsed();

                self.insert_one(&mut report, &batch, normalized).await?;
                progress.batch_done(&self.update(index, total_batches, report.inserted));
                index += 1;
            }
        }
        progress.finish();
        self.transition(SessionState::RecordsInserted);

        report.final_count = self.backend.get_count(&table).await?;
        report.connection = self.backend.connection_info();
        report.warnings = warnings;
        report.total_duration = started.elapsed();
        info!(
            "Inserted {} records into {} ({} total, {:.0} rows/s)",
            report.inserted,
            table,
            report.final_count,
            report.rows_per_second()
        );
        self.transition(SessionState::Reported);
        Ok(report)
    }

    async fn insert_one(
        &mut self,
        report: &mut SeedReport,
        batch: &[Record],
        normalized: bool,
    ) -> Result<(), SeedError> {
        let insert_started = Instant::now();
        let inserted = self
            .backend
            .insert_batch(self.schema, batch, normalized)
            .await?;
        report.insert_duration += insert_started.elapsed();
        report.inserted += inserted;
        report.batches += 1;
        debug!(
            "Batch {}: inserted {} of {} records",
            report.batches,
            inserted,
            batch.len()
        );
        Ok(())
    }

    /// Drop the tables this session writes to. Failures are ignored.
    async fn clear_tables(&mut self, table: &str, normalized: bool) {
        let mut tables = vec![table.to_string()];
        if normalized {
            tables.push(CUSTOMERS_TABLE.to_string());
            tables.push(PRODUCTS_TABLE.to_string());
        }
        for table in tables {
            if let Err(e) = self.backend.drop_table(&table).await {
                debug!("Ignoring failure to drop {table}: {e}");
            }
        }
    }

    fn update(&self, index: usize, total_batches: usize, inserted: u64) -> ProgressUpdate {
        ProgressUpdate {
            batch: index + 1,
            total_batches,
            inserted,
            target: self.plan.count,
        }
    }
}
