use crate::reports;
use clap::Args;
use scorigami::error::SgResult;
use scorigami::view::Controller;

#[derive(Args, Debug, Clone)]
pub struct DetailArgs {
    /// Full scoreline key, e.g. "6-4, 3-6, 7-5".
    pub scoreline: String,
}

pub fn run(args: DetailArgs, controller: &Controller) -> SgResult<()> {
    match controller.score_details(&args.scoreline) {
        Some(details) => {
            reports::tables::details(&details);
            Ok(())
        }
        None => {
            println!("No such scoreline: {}", args.scoreline);
            Ok(())
        }
    }
}
