use anyhow::Context;
use resvo_engine::{
    BusinessCalendar, JsonSnapshotSource, ReservationSource, StatisticsReport, StatsPeriod,
    setup_environment,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration and logging
    let config = setup_environment()?;

    // 2. Calendar
    let calendar = BusinessCalendar::current(config.tz());
    tracing::info!(
        timezone = %calendar.tz(),
        now = %calendar.now(),
        today = %calendar.today(),
        snapshot = %config.snapshot_path.display(),
        "Resvo report starting"
    );

    // 3. Snapshot
    let source = JsonSnapshotSource::new(&config.snapshot_path, calendar.tz());
    let restaurant_id = match config.restaurant_id.clone() {
        Some(id) => id,
        None => source
            .first_restaurant_id()
            .await?
            .context("Snapshot contains no restaurant")?,
    };
    let settings = source.load_settings(&restaurant_id).await?;
    let reservations = source.load_reservations(&restaurant_id).await?;

    // 4. Report
    let today = calendar.today();
    let period = StatsPeriod::new(config.period_key(), today);
    let report =
        StatisticsReport::build(&reservations, &settings, &period, today, config.top_days);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
