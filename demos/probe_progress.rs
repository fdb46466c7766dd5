//! # Example: probe_progress
//!
//! Probes a handful of well-known packages against the public npm registry,
//! with progress reported through the event bus and [`LogWriter`].
//!
//! Demonstrates how to:
//! - Wire [`Bus`] → [`SubscriberSet`] → [`LogWriter`].
//! - Fan probes out through the [`TaskPool`].
//! - Build a [`Report`] from the settled handles.
//!
//! ## Run
//! ```bash
//! # needs network access to registry.npmjs.org
//! cargo run --example probe_progress
//! ```

use std::sync::Arc;

use pkgprobe::{
    Bus, Event, EventKind, LogWriter, Package, PoolConfig, RegistryClient, RegistryConfig,
    Report, Subscribe, SubscriberSet, TaskPool,
};

fn package(name: &str, version: &str) -> Package {
    Package {
        name: name.to_string(),
        version: version.to_string(),
        private: false,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let packages = vec![
        package("react", "18.2.0"),
        package("lodash", "4.17.21"),
        package("@babel/core", "7.24.0"),
        package("definitely-not-a-real-package-xyz", "1.0.0"),
    ];

    let pool = TaskPool::new(PoolConfig { concurrency: 2 })?;
    let client = Arc::new(RegistryClient::new(RegistryConfig::default())?);

    let bus = Bus::new(64);
    let subs = Arc::new(SubscriberSet::new(vec![
        Arc::new(LogWriter) as Arc<dyn Subscribe>
    ]));
    let listener = subs.attach(&bus);

    bus.publish(Event::new(EventKind::RunStarted).with_count(packages.len()));

    let handles: Vec<_> = packages
        .iter()
        .cloned()
        .map(|pkg| {
            let client = Arc::clone(&client);
            let bus = bus.clone();
            pool.submit(move || async move {
                match client.probe(&pkg).await {
                    Ok(status) => {
                        bus.publish(
                            Event::new(EventKind::ProbeCompleted)
                                .with_package(pkg.spec())
                                .with_public(status.public)
                                .with_private(status.private),
                        );
                        Ok(status)
                    }
                    Err(err) => {
                        bus.publish(
                            Event::new(EventKind::ProbeFailed)
                                .with_package(pkg.spec())
                                .with_reason(err.to_string()),
                        );
                        Err(err.into())
                    }
                }
            })
        })
        .collect();

    let outcomes = futures::future::join_all(handles).await;
    let report = Report::from_outcomes(packages.into_iter().zip(outcomes).collect());

    bus.publish(Event::new(EventKind::RunCompleted).with_count(report.total()));
    drop(bus);
    let _ = listener.await;
    if let Ok(set) = Arc::try_unwrap(subs) {
        set.shutdown().await;
    }

    println!("\n{}", report.render());
    Ok(())
}
