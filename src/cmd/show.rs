use crate::reports;
use clap::Args;
use scorigami::error::SgResult;
use scorigami::filter::ExplorerFilter;
use scorigami::narrative::{Sequencer, Step, Transition};
use scorigami::view::Controller;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Narrative step name, e.g. "combined-2024" or "never-seen".
    #[arg(short, long)]
    pub step: Step,
}

pub fn run(args: ShowArgs, controller: &Controller) -> SgResult<()> {
    let mut renderer = reports::grid::TextRenderer::new();
    println!("\n=== Step: {} ===", args.step);
    controller.render_step(args.step, &mut renderer);
    Ok(())
}

/// Walks the whole narrative in order; "next" past the final step drops
/// into the explorer with everything selected.
pub fn run_all(controller: &Controller) -> SgResult<()> {
    let mut sequencer = Sequencer::new();
    let mut renderer = reports::grid::TextRenderer::new();

    loop {
        let step = sequencer.current();
        println!(
            "\n=== Step {}/{}: {} ===",
            sequencer.index() + 1,
            Sequencer::step_count(),
            step
        );
        controller.render_step(step, &mut renderer);

        match sequencer.next() {
            Transition::Step(_) => {}
            Transition::EnterExplorer => break,
        }
    }

    println!("\n=== Explorer (all tours, all years) ===");
    controller.render_explorer(&ExplorerFilter::default(), &mut renderer);
    Ok(())
}
