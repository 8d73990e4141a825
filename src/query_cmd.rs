//! Query command: resolve the period active at an instant.

use anyhow::{Context, Result};
use tracing::info_span;

use belltower_engine::PeriodMatch;
use belltower_instant::{resolve_zone, TimeInstant};

use crate::cli::QueryArgs;
use crate::load;

/// Run the query pipeline.
pub fn run(args: QueryArgs) -> Result<()> {
    let _cmd = info_span!("query").entered();
    let year = load::load_year(&args.schedule)?;

    let zone = match args.zone.as_deref() {
        Some(id) => resolve_zone(id).with_context(|| format!("bad --zone value: {id}"))?,
        None => year.timezone(),
    };
    let instant = match args.at.as_deref() {
        Some(text) => TimeInstant::of(text, zone.name())
            .with_context(|| format!("bad --at value: {text}"))?,
        None => TimeInstant::now().with_zone(zone),
    };

    println!("At {instant}:");
    match year.current_period(instant) {
        Some(m) => println!("  Current:      {}", describe(&m)),
        None => println!("  Current:      (outside the schedule)"),
    }
    match year.next_period(instant)? {
        Some(m) => println!("  Next:         {}", describe(&m)),
        None => println!("  Next:         (none remaining)"),
    }
    match year.next_counted_period(instant)? {
        Some(m) => println!("  Next counted: {}", describe(&m)),
        None => println!("  Next counted: (none remaining)"),
    }
    match year.time_remaining(instant)? {
        Some(d) => println!("  Remaining:    {d}"),
        None => println!("  Remaining:    (no counted time ahead)"),
    }
    Ok(())
}

/// One-line rendering of a period match with its anchored bounds.
fn describe(m: &PeriodMatch<'_>) -> String {
    format!(
        "{} ({}) {} .. {}",
        m.period().name(),
        m.day().day_type(),
        m.start(),
        m.end()
    )
}
