#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod app;
mod report;

use app::*;
use fixtures::*;
use lux_core::compliance::*;
use lux_core::contour::*;
use lux_core::energy::*;
use lux_core::field::*;
use lux_core::fixture::*;
use lux_core::glare::*;
use lux_core::layout::*;
use lux_core::scene::*;
use lux_core::spillage::*;
use lux_core::standards::*;
use lux_core::statistics::*;
use report::*;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let library = FixtureLibrary::new();

    if OPTIONS.list_fixtures {
        println!("{}", catalog_listing(&library));
        return;
    }

    if let Err(e) = calculate(&library) {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Print unless `--quiet` was given.
fn say(text: &str) {
    if !OPTIONS.quiet {
        println!("{text}");
    }
}

fn calculate(library: &FixtureLibrary) -> Result<(), String> {
    let area = OPTIONS.calculation_area()?;

    // In case of error report it and continue with the remaining fixtures.
    let mut placed: Vec<Fixture> = vec![];
    for (i, arg) in OPTIONS.fixtures.iter().enumerate() {
        match parse_placement(arg, i + 1, library) {
            Ok(fixture) => placed.push(fixture),
            Err(e) => error!("{e}"),
        }
    }

    if OPTIONS.optimize {
        let candidates: Vec<ArcFixtureType> = match OPTIONS.candidate_category()? {
            Some(category) => library
                .by_category(category)
                .iter()
                .map(|e| e.fixture_type.clone())
                .collect(),
            None => library.fixture_types(),
        };

        match optimize(&area, &OPTIONS.layout_requirements(), &candidates, beam_spacing) {
            Ok(plan) => {
                say(&layout_summary(&plan));
                placed.extend(plan.fixtures(Orientation::new(0.0, OPTIONS.layout_tilt)));
            }
            Err(e) => error!("{e}"),
        }
    }

    if placed.is_empty() {
        warn!("No fixtures placed; the field will be dark");
    }

    let scene = Scene::new(placed, vec![area]);
    let area = scene.calculation_area().ok_or("No calculation area")?;

    // Validate first so errors surface before the progress bar appears.
    let sampler = GridSampler::new(OPTIONS.spacing).with_surface_reflectance(OPTIONS.reflectance);
    let scan = sampler
        .prepare(&scene.fixtures, area)
        .map_err(|e| e.to_string())?;

    let progress = create_progress_reporter(scan.row_count() as u64, OPTIONS.quiet);
    progress.set_message("Sampling grid");
    let field = scan
        .run_parallel(OPTIONS.threads(), &CancelToken::new(), |done, _| {
            progress.set_position(done as u64)
        })
        .map_err(|e| e.to_string())?;
    progress.finish_with_message("Grid complete");

    let stats = Statistics::reduce(&field);
    let catalog = StandardsCatalog::builtin();
    let compliance = check(&stats, &OPTIONS.standard, &catalog);
    let contours = generate(&field, &OPTIONS.contour_levels());

    let boundary = area
        .boundary_points(OPTIONS.spacing, OPTIONS.spill_offset)
        .map_err(|e| e.to_string())?;
    let spillage = evaluate(&scene.fixtures, &boundary, OPTIONS.spill_threshold);

    let energy = power_consumption(&scene.fixtures, &OPTIONS.tariff());
    let glare = OPTIONS
        .glare_observer()?
        .map(|(observer, view)| glare_rating(&scene.fixtures, &observer, view));

    say(&calculation_report(
        &stats,
        &compliance,
        &contours,
        (&spillage, OPTIONS.spill_threshold),
        &energy,
        glare,
    ));

    Ok(())
}
