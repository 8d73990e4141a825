//! Validate command: check a schedule file and report its shape.

use anyhow::Result;
use tracing::info_span;

use crate::cli::ValidateArgs;
use crate::load;

/// Run the validate pipeline.
pub fn run(args: ValidateArgs) -> Result<()> {
    let _cmd = info_span!("validate").entered();
    let year = load::load_year(&args.schedule)?;

    println!("Schedule OK: {}", args.schedule.display());
    println!("  Span:           {} .. {}", year.first_day(), year.last_day());
    println!("  Timezone:       {}", year.timezone());
    println!(
        "  Periods:        {} .. {}",
        year.first_period(),
        year.last_period()
    );
    println!("  Weeks expanded: {}", year.week_count());
    println!("  Day templates:  {}", year.day_template_count());
    println!("  Week templates: {}", year.week_template_count());
    Ok(())
}
