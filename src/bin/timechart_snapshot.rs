#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cairo-backend")]
const DEFAULT_PAYLOAD_PATH: &str = "data.json";
#[cfg(feature = "cairo-backend")]
const DEFAULT_CHART_PNG_PATH: &str = "chart.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_RULER_PNG_PATH: &str = "time.png";

#[cfg(feature = "cairo-backend")]
const CHART_VIEWPORT: (u32, u32) = (1200, 250);
#[cfg(feature = "cairo-backend")]
const RULER_VIEWPORT: (u32, u32) = (1200, 100);

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    payload_path: PathBuf,
    chart_png_path: PathBuf,
    ruler_png_path: PathBuf,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use timechart::api::{ChartStyle, RulerStyle, ShortDateFormatter, draw_chart, draw_time_ruler};
    use timechart::core::{Dataset, Viewport};
    use timechart::render::{CairoSurface, Scene};

    let _ = timechart::telemetry::init_default_tracing();

    let args = parse_args()?;
    let payload = fs::read_to_string(&args.payload_path).map_err(|err| {
        format!(
            "failed to read payload `{}`: {err}",
            args.payload_path.display()
        )
    })?;
    let dataset =
        Dataset::from_json_str(&payload).map_err(|err| format!("failed to load dataset: {err}"))?;

    let chart_viewport = Viewport::new(CHART_VIEWPORT.0, CHART_VIEWPORT.1);
    let chart_surface = CairoSurface::new(chart_viewport)
        .map_err(|err| format!("chart surface init failed: {err}"))?;
    let mut chart_scene = Scene::new(chart_surface, chart_viewport)
        .map_err(|err| format!("chart scene init failed: {err}"))?;
    draw_chart(&mut chart_scene, &dataset, &ChartStyle::default())
        .map_err(|err| format!("chart render failed: {err}"))?;
    write_png(chart_scene.into_surface(), &args.chart_png_path)?;

    let ruler_viewport = Viewport::new(RULER_VIEWPORT.0, RULER_VIEWPORT.1);
    let ruler_surface = CairoSurface::new(ruler_viewport)
        .map_err(|err| format!("ruler surface init failed: {err}"))?;
    let mut ruler_scene = Scene::new(ruler_surface, ruler_viewport)
        .map_err(|err| format!("ruler scene init failed: {err}"))?;
    draw_time_ruler(
        &mut ruler_scene,
        &dataset,
        &ShortDateFormatter::default(),
        &RulerStyle::default(),
    )
    .map_err(|err| format!("ruler render failed: {err}"))?;
    write_png(ruler_scene.into_surface(), &args.ruler_png_path)?;

    println!(
        "rendered {} sample(s) -> {} and {}",
        dataset.len(),
        args.chart_png_path.display(),
        args.ruler_png_path.display()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(surface: timechart::render::CairoSurface, path: &Path) -> Result<(), String> {
    let mut file = File::create(path)
        .map_err(|err| format!("failed to create png `{}`: {err}", path.display()))?;
    surface
        .image_surface()
        .write_to_png(&mut file)
        .map_err(|err| format!("failed to write png `{}`: {err}", path.display()))?;
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut payload_path = PathBuf::from(DEFAULT_PAYLOAD_PATH);
    let mut chart_png_path = PathBuf::from(DEFAULT_CHART_PNG_PATH);
    let mut ruler_png_path = PathBuf::from(DEFAULT_RULER_PNG_PATH);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--payload" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --payload".to_owned())?;
                payload_path = PathBuf::from(value);
            }
            "--chart-png" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --chart-png".to_owned())?;
                chart_png_path = PathBuf::from(value);
            }
            "--ruler-png" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --ruler-png".to_owned())?;
                ruler_png_path = PathBuf::from(value);
            }
            "--help" | "-h" => {
                println!(
                    "usage: timechart_snapshot [--payload <path>] [--chart-png <path>] [--ruler-png <path>]"
                );
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(CliArgs {
        payload_path,
        chart_png_path,
        ruler_png_path,
    })
}
