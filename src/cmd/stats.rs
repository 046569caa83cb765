use crate::reports;
use clap::Args;
use scorigami::error::SgResult;
use scorigami::stats::Statistics;
use scorigami::view::Controller;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Emit machine-readable JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: StatsArgs, controller: &Controller) -> SgResult<()> {
    let stats = Statistics::compute(controller.dataset());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        reports::tables::statistics(&stats);
    }
    Ok(())
}
