use recipebox_ranking::{compute_trending_by, recommend};
use recipebox_recipe::{Command, Query};
use recipebox_shared::PopularitySignal;
use temp_dir::TempDir;

mod helpers;

async fn like_many(command: &Command, id: &str, count: usize) -> anyhow::Result<()> {
    for user in 0..count {
        command.like(id, format!("user-{user}")).await?;
    }

    Ok(())
}

#[tokio::test]
async fn test_trending_persists_ever_top_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let a = helpers::create_recipe(&command, "A", &["a"], "a").await?;
    let b = helpers::create_recipe(&command, "B", &["b"], "b").await?;
    let c = helpers::create_recipe(&command, "C", &["c"], "c").await?;
    like_many(&command, &a, 5).await?;
    like_many(&command, &b, 9).await?;
    like_many(&command, &c, 2).await?;

    let trending = compute_trending_by(&query.snapshot().await?, PopularitySignal::Likes, 2);
    assert_eq!(trending.ids(), vec![b.as_str(), a.as_str()]);
    trending.persist(&command).await?;

    let snapshot = query.snapshot().await?;
    let flags: Vec<bool> = snapshot.iter().map(|r| r.ever_top).collect();
    assert_eq!(flags, vec![true, true, false]);

    let second = compute_trending_by(&snapshot, PopularitySignal::Likes, 2);
    assert!(second.newly_top.is_empty());
    assert_eq!(second.ids(), trending.ids());

    assert!(!command.flag_ever_top(&a).await?);
    assert!(command.flag_ever_top(&c).await?);
    assert!(!command.flag_ever_top("missing").await?);

    Ok(())
}

#[tokio::test]
async fn test_ever_top_survives_leaving_trending() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let a = helpers::create_recipe(&command, "A", &["a"], "a").await?;
    let b = helpers::create_recipe(&command, "B", &["b"], "b").await?;
    command.view(&a).await?;

    compute_trending_by(&query.snapshot().await?, PopularitySignal::Views, 1)
        .persist(&command)
        .await?;

    for _ in 0..3 {
        command.view(&b).await?;
    }

    let trending = compute_trending_by(&query.snapshot().await?, PopularitySignal::Views, 1);
    assert_eq!(trending.ids(), vec![b.as_str()]);
    trending.persist(&command).await?;

    let a = query.find(&a).await?.unwrap();
    assert!(a.ever_top);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_trending_runs() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    for title in ["A", "B", "C", "D"] {
        let id = helpers::create_recipe(&command, title, &["x"], "y").await?;
        command.view(&id).await?;
    }

    let snapshot = query.snapshot().await?;
    let (snapshot_ref, command_ref) = (&snapshot, &command);
    let runs = (0..4).map(|_| async move {
        compute_trending_by(snapshot_ref, PopularitySignal::Views, 3)
            .persist(command_ref)
            .await
    });
    for result in futures::future::join_all(runs).await {
        result?;
    }

    let flagged = query
        .snapshot()
        .await?
        .into_iter()
        .filter(|r| r.ever_top)
        .count();
    assert_eq!(flagged, 3);

    Ok(())
}

#[tokio::test]
async fn test_recommend_from_stored_recipes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    helpers::create_recipe(
        &command,
        "Vanilla Ice Cream",
        &["cream", "sugar"],
        "Churn until light.",
    )
    .await?;
    let curry = helpers::create_recipe(
        &command,
        "Spicy Thai Curry",
        &["coconut milk", "chili"],
        "An exotic and unique dish.",
    )
    .await?;

    let recommended = recommend("Adventurous", query.snapshot().await?, 5);

    assert_eq!(recommended.len(), 2);
    assert_eq!(recommended[0].id, curry);

    Ok(())
}
