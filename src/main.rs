//! Headless driver: sorts a value list against an in-memory binding at a
//! fixed 60 Hz timestep and logs every call a host would receive.

use std::ops::Range;
use std::path::Path;
use std::time::Duration;

use sortviz::binding::MemoryBinding;
use sortviz::error::SortVizError;
use sortviz::input::random_input;
use sortviz::options::Options;
use sortviz::session::Visualizer;
use sortviz::sort::{Algorithm, Arrangement};
use web_time::Instant;

const FRAME: Duration = Duration::from_micros(16_667);
/// One simulated hour.
const MAX_FRAMES: usize = 60 * 60 * 60;
const RANDOM_COUNT: usize = 5;
const RANDOM_RANGE: Range<i64> = 0..10;

fn load_options() -> Result<Options, SortVizError> {
    match std::env::var_os("SORTVIZ_OPTIONS") {
        Some(path) => {
            log::info!("loading options from {}", path.to_string_lossy());
            Options::load(Path::new(&path))
        }
        None => Ok(Options::default()),
    }
}

fn write_schema(path: &str) -> Result<(), SortVizError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| SortVizError::OptionsParse(e.to_string()))?;
    std::fs::write(path, schema)?;
    log::info!("wrote options schema to {path}");
    Ok(())
}

fn run(input: &str, algorithm: Option<&str>) -> Result<(), SortVizError> {
    let options = load_options()?;
    let mut viz =
        Visualizer::new(MemoryBinding::new().with_logging(), options);
    if let Some(name) = algorithm {
        let algorithm = Algorithm::from_name(name).ok_or_else(|| {
            SortVizError::InvalidInput(format!("unknown algorithm '{name}'"))
        })?;
        viz.set_algorithm(algorithm);
    }

    let input = if input == "random" {
        let text =
            random_input(&mut rand::rng(), RANDOM_COUNT, RANDOM_RANGE);
        log::info!("random input: {text}");
        text
    } else {
        input.to_owned()
    };
    viz.submit(&input)?;

    let started = Instant::now();
    let mut simulated = Duration::ZERO;
    let mut state = viz.state();
    for _ in 0..MAX_FRAMES {
        state = viz.tick(FRAME)?;
        simulated += FRAME;
        if state.is_terminal() {
            break;
        }
    }

    let values = viz
        .arrangement()
        .map(Arrangement::values)
        .unwrap_or_default();
    log::info!(
        "{} after {:.1}s simulated ({:?} wall): {values:?}",
        state.label(),
        simulated.as_secs_f32(),
        started.elapsed()
    );
    if let Some(controller) = viz.controller() {
        log::info!(
            "{} steps, {} comparisons, {} binding calls",
            controller.steps_applied(),
            controller.comparisons(),
            viz.binding().calls().len()
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [flag, path] if flag == "--schema" => write_schema(path),
        [input] => run(input, None),
        [input, algorithm] => run(input, Some(algorithm)),
        _ => {
            log::error!(
                "Usage: sortviz <values|random> [bubble|insertion] \
                 | --schema <path>"
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
