//! End-to-end seeding into a DuckDB file.

use ecosystem_seed::backends::BackendConfig;
use ecosystem_seed::seed::{
    run_seed, NoProgress, ProgressSink, ProgressUpdate, SeedPlan, SeedRequest, SeedSession,
};
use seed_backend::Backend;
use seed_backend_duckdb::{DuckDbArgs, DuckDbBackend};
use seed_core::registry::get_schema;
use seed_core::{GeneratorConfig, Schema};
use seed_generator::DateWindow;
use std::path::Path;

#[derive(Default)]
struct Recorded(Vec<ProgressUpdate>);

impl ProgressSink for Recorded {
    fn batch_done(&mut self, update: &ProgressUpdate) {
        self.0.push(*update);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("ecosystem_seed=debug,seed_backend_duckdb=debug")
        .try_init()
        .ok();
}

fn duckdb_config(path: &Path) -> BackendConfig {
    BackendConfig {
        duckdb: DuckDbArgs {
            path: path.to_path_buf(),
        },
        ..Default::default()
    }
}

async fn count(path: &Path, table: &str) -> u64 {
    let mut backend = DuckDbBackend::new(DuckDbArgs {
        path: path.to_path_buf(),
    });
    let count = backend.get_count(table).await.unwrap();
    backend.disconnect().await.unwrap();
    count
}

/// Replace a field's generator, optionally making it unique.
fn with_generator(schema: &Schema, field: &str, generator: GeneratorConfig, unique: bool) -> Schema {
    let mut schema = schema.clone();
    for definition in schema.fields.iter_mut().filter(|f| f.name == field) {
        definition.generator = generator.clone();
        definition.unique = unique;
    }
    schema
}

fn plan(count: usize, batch_size: usize, normalize: bool) -> SeedPlan {
    SeedPlan {
        count,
        batch_size,
        window: DateWindow::last_year(),
        normalize,
        clear: false,
        seed: 1234,
    }
}

#[tokio::test]
async fn test_seed_contacts_into_duckdb() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("seed.duckdb");

    let mut request = SeedRequest::new("contacts", "duck");
    request.count = 100;
    request.batch_size = 50;
    request.seed = Some(42);

    let mut progress = Recorded::default();
    let report = run_seed(&request, &duckdb_config(&path), &mut progress)
        .await
        .unwrap();

    assert_eq!(report.table, "contacts");
    assert_eq!(report.inserted, 100);
    assert_eq!(report.final_count, 100);
    assert_eq!(report.batches, 2);
    assert_eq!(report.seed, 42);
    assert_eq!(progress.0.len(), 2);
    assert_eq!(progress.0[1].percent(), 100);
    assert_eq!(
        report.connection.database.as_deref(),
        Some(path.to_string_lossy().as_ref())
    );

    // A second run appends with fresh ids.
    let report = run_seed(&request, &duckdb_config(&path), &mut NoProgress)
        .await
        .unwrap();
    assert_eq!(report.final_count, 200);
    assert_eq!(count(&path, "contacts").await, 200);
}

#[tokio::test]
async fn test_clear_replaces_previous_data() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.duckdb");
    let config = duckdb_config(&path);

    let mut request = SeedRequest::new("products", "duckdb");
    request.count = 30;
    run_seed(&request, &config, &mut NoProgress).await.unwrap();

    request.count = 10;
    request.clear = true;
    let report = run_seed(&request, &config, &mut NoProgress).await.unwrap();
    assert_eq!(report.final_count, 10);
}

#[tokio::test]
async fn test_normalized_orders_share_customers() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.duckdb");

    let emails = [
        "ada@example.com",
        "grace@example.com",
        "alan@example.com",
        "edsger@example.com",
        "barbara@example.com",
    ];
    let schema = with_generator(
        get_schema("sales_orders").unwrap(),
        "customer_email",
        GeneratorConfig::one_of(&emails),
        false,
    );

    let backend = DuckDbBackend::new(DuckDbArgs { path: path.clone() });
    let mut session = SeedSession::new(Box::new(backend), &schema, plan(50, 20, true));
    let report = session.run(&mut NoProgress).await.unwrap();

    assert!(report.normalized);
    assert_eq!(report.table, "sales_orders_normalized");
    assert_eq!(report.customers, 5);
    assert_eq!(report.inserted, 50);
    assert_eq!(report.batches, 3);
    assert_eq!(count(&path, "customers").await, 5);
    assert_eq!(count(&path, "sales_orders_normalized").await, 50);
}

#[tokio::test]
async fn test_unique_collisions_are_skipped() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.duckdb");

    let schema = with_generator(
        get_schema("contacts").unwrap(),
        "email",
        GeneratorConfig::one_of(&["a@example.com", "b@example.com", "c@example.com"]),
        true,
    );

    let backend = DuckDbBackend::new(DuckDbArgs { path: path.clone() });
    let mut session = SeedSession::new(Box::new(backend), &schema, plan(60, 1, false));
    let report = session.run(&mut NoProgress).await.unwrap();

    assert_eq!(report.batches, 60);
    assert_eq!(report.inserted, 3);
    assert_eq!(report.final_count, 3);
}

#[tokio::test]
async fn test_unwritable_path_is_unavailable() {
    let config = duckdb_config(Path::new("/proc/ecosystem-seed/seed.duckdb"));
    let request = SeedRequest::new("contacts", "duckdb");

    let err = run_seed(&request, &config, &mut NoProgress).await.unwrap_err();
    assert!(!err.is_configuration());
    assert!(err.to_string().contains("duckdb is unavailable"));
}
