//! # pkgprobe CLI.
//!
//! Enumerates the yarn workspace in the current directory, probes every
//! dependency against the configured registries through the bounded task
//! pool, and prints a report of packages that are missing or failed to
//! probe.
//!
//! ## Flow
//! ```text
//! yarn info ──► TaskPool::submit (one probe per package)
//!                    │
//!              join_all(handles)
//!                    │
//!              Report::from_outcomes ──► table / failure list
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use pkgprobe::{
    Bus, DEFAULT_CONCURRENCY, Event, EventKind, LogWriter, PUBLIC_NPM_REGISTRY, PoolConfig,
    PrivateRegistry, RegistryClient, RegistryConfig, Report, Subscribe, SubscriberSet, TaskPool,
    list_packages,
};

/// Environment variable consulted when `--auth-token` is not given.
const AUTH_TOKEN_ENV: &str = "PKGPROBE_AUTH_TOKEN";

#[derive(Parser, Debug)]
#[command(
    name = "pkgprobe",
    version,
    about = "Checks workspace package availability on npm registries"
)]
struct Cli {
    /// Maximum number of registry probes in flight at once.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Public registry base URL.
    #[arg(long, default_value = PUBLIC_NPM_REGISTRY)]
    registry: String,

    /// Private registry base URL; private-prefixed packages are checked
    /// only here.
    #[arg(long)]
    private_registry: Option<String>,

    /// Authorization header value for the private registry
    /// (falls back to $PKGPROBE_AUTH_TOKEN).
    #[arg(long)]
    auth_token: Option<String>,

    /// Name prefix marking a package as private (e.g. `@acme/`).
    #[arg(long)]
    private_prefix: Option<String>,

    /// Suppress per-package progress lines.
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("pkgprobe: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let pool = TaskPool::new(PoolConfig {
        concurrency: cli.concurrency,
    })?;

    let auth_token = cli
        .auth_token
        .or_else(|| std::env::var(AUTH_TOKEN_ENV).ok());
    let config = RegistryConfig {
        public_url: cli.registry,
        private: cli.private_registry.map(|url| PrivateRegistry {
            url,
            auth_token,
        }),
        private_prefix: cli.private_prefix,
    };
    let client = Arc::new(RegistryClient::new(config)?);

    let packages = list_packages(client.config().private_prefix.as_deref())
        .await
        .context("failed to enumerate workspace packages")?;
    anyhow::ensure!(!packages.is_empty(), "no packages found in this workspace");

    let bus = Bus::new(1024);
    let subscribers: Vec<Arc<dyn Subscribe>> = if cli.quiet {
        Vec::new()
    } else {
        vec![Arc::new(LogWriter)]
    };
    let subs = Arc::new(SubscriberSet::new(subscribers));
    let listener = subs.attach(&bus);

    bus.publish(Event::new(EventKind::RunStarted).with_count(packages.len()));

    let mut handles = Vec::with_capacity(packages.len());
    for package in &packages {
        let client = Arc::clone(&client);
        let bus = bus.clone();
        let package = package.clone();

        handles.push(pool.submit(move || async move {
            bus.publish(Event::new(EventKind::ProbeStarting).with_package(package.spec()));
            match client.probe(&package).await {
                Ok(status) => {
                    bus.publish(
                        Event::new(EventKind::ProbeCompleted)
                            .with_package(package.spec())
                            .with_public(status.public)
                            .with_private(status.private),
                    );
                    Ok(status)
                }
                Err(err) => {
                    bus.publish(
                        Event::new(EventKind::ProbeFailed)
                            .with_package(package.spec())
                            .with_reason(err.to_string()),
                    );
                    Err(err.into())
                }
            }
        }));
    }

    let outcomes = futures::future::join_all(handles).await;
    let report = Report::from_outcomes(packages.into_iter().zip(outcomes).collect());

    bus.publish(Event::new(EventKind::RunCompleted).with_count(report.total()));

    // Close the bus so the listener drains, then flush subscriber queues
    // before the report hits stdout.
    drop(bus);
    let _ = listener.await;
    if let Ok(set) = Arc::try_unwrap(subs) {
        set.shutdown().await;
    }

    println!("\n{}", report.render());
    Ok(report.is_clean())
}
