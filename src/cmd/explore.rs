use crate::reports;
use clap::Args;
use scorigami::error::SgResult;
use scorigami::filter::ExplorerFilter;
use scorigami::view::Controller;

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    /// Tours to include: "atp", "wta", or "all".
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub tours: Vec<String>,

    /// Years to include, e.g. "2015,2016", or "all".
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub years: Vec<String>,
}

pub fn run(args: ExploreArgs, controller: &Controller) -> SgResult<()> {
    let filter = ExplorerFilter::parse(&args.tours, &args.years)?;

    let frame = controller.explorer_frame(&filter);
    let observed = frame
        .cells
        .iter()
        .filter(|c| c.bucket.is_highlighted())
        .count();

    let mut renderer = reports::grid::TextRenderer::new();
    controller.render_explorer(&filter, &mut renderer);

    println!(
        "\n{} of {} possible scorelines observed under this filter",
        observed,
        frame.cells.len()
    );

    let years: Vec<String> = controller
        .dataset()
        .years()
        .iter()
        .map(u16::to_string)
        .collect();
    println!("Years available: all, {}", years.join(", "));
    Ok(())
}
