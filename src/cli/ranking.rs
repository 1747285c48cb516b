use anyhow::Result;
use recipebox::Config;
use recipebox_ranking::compute_trending_by;
use recipebox_shared::PopularitySignal;

/// Prints the current trending recipes as JSON and saves new `ever_top` flags.
pub async fn trending(
    config: Config,
    signal: Option<PopularitySignal>,
    size: Option<usize>,
) -> Result<()> {
    let signal = signal.unwrap_or(config.ranking.trending_signal);
    let size = size.unwrap_or(config.ranking.trending_size);
    let (pool, command, query) = super::connect(&config).await?;

    let snapshot = query.snapshot().await?;
    let trending = compute_trending_by(&snapshot, signal, size);
    let persisted = trending.persist(&command).await;

    println!("{}", serde_json::to_string_pretty(&trending.recipes)?);
    pool.close().await;

    persisted?;

    tracing::info!(%signal, size, newly_top = trending.newly_top.len(), "Trending computed");

    Ok(())
}

/// Prints recipes matching `mood` as JSON.
pub async fn recommend(config: Config, mood: String, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(config.ranking.recommendation_limit);
    let (pool, _, query) = super::connect(&config).await?;

    let snapshot = query.snapshot().await?;
    let recipes = recipebox_ranking::recommend(&mood, snapshot, limit);

    println!("{}", serde_json::to_string_pretty(&recipes)?);
    pool.close().await;

    Ok(())
}
