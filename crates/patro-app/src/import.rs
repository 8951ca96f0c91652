//! Startup artifact import: scans the artifacts directory for
//! `artifact-<year>.json` files and seeds the calendar tables before the
//! server starts accepting requests.

use std::path::PathBuf;

use anyhow::Context;
use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;

use patro_core::config::ImportConfig;
use patro_db::db::DbProvider;
use patro_db::db::connection::DbPool;
use patro_db::db::seed::artifact::Artifact;
use patro_db::db::seed::seed_artifact;

/// ## Summary
/// Runs the import pass over every artifact file, oldest year first, one
/// transaction per artifact. Re-running over already-imported artifacts is
/// a no-op. Skipped entirely when `import.skip` is set.
///
/// ## Errors
/// Returns an error if the artifacts directory cannot be read, a file is
/// malformed, or a statement fails.
#[tracing::instrument(skip(pool, config))]
pub async fn run_import(pool: &DbPool, config: &ImportConfig) -> anyhow::Result<()> {
    if config.skip {
        tracing::info!("artifact import skipped by configuration");
        return Ok(());
    }

    let artifacts = discover_artifacts(&config.artifacts_dir).await?;
    tracing::info!(
        years = ?artifacts.iter().map(|(year, _)| *year).collect::<Vec<_>>(),
        "artifacts found"
    );

    for (year, path) in artifacts {
        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("cannot read artifact \"{}\"", path.display()))?;
        let artifact: Artifact = serde_json::from_str(&text)
            .with_context(|| format!("malformed artifact \"{}\"", path.display()))?;

        let mut conn = pool.get_connection().await?;
        let processed = conn
            .transaction::<_, anyhow::Error, _>(move |tx| {
                async move { seed_artifact(tx, &artifact).await }.scope_boxed()
            })
            .await?;

        tracing::info!(year, days = processed, "artifact imported");
    }

    Ok(())
}

/// Lists `artifact-<year>.json` files in the directory, sorted by year.
async fn discover_artifacts(dir: &str) -> anyhow::Result<Vec<(i32, PathBuf)>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("cannot read artifacts directory \"{dir}\""))?;

    let mut artifacts = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(year) = name
            .strip_prefix("artifact-")
            .and_then(|rest| rest.strip_suffix(".json"))
        else {
            continue;
        };
        if let Ok(year) = year.parse::<i32>() {
            artifacts.push((year, entry.path()));
        }
    }

    artifacts.sort_unstable_by_key(|(year, _)| *year);
    Ok(artifacts)
}
