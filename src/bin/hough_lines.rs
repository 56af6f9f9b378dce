use faster_hough::config::hough::load_config;
use faster_hough::finder::LineFinder;
use faster_hough::image::io::{load_grayscale_image, save_grayscale_u8, save_rgb_image, write_json_file};
use faster_hough::render::render_overlay;
use log::info;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let mut finder = LineFinder::new(config.finder_params());
    let faster = finder
        .run_faster_hough(gray.as_view())
        .map_err(|e| format!("Line search failed: {e}"))?;

    if let Some(path) = &config.output.edge_image {
        if let Some(edges) = finder.last_edge_map() {
            save_grayscale_u8(&edges.edges, path)?;
            info!("Saved edge map to {}", path.display());
        }
    }

    if let Some(path) = &config.output.overlay_image {
        let overlay = render_overlay(&gray.as_view(), &faster.lines_in_input());
        save_rgb_image(&overlay, path)?;
        info!("Saved overlay to {}", path.display());
    }

    let baseline = if config.baseline {
        Some(
            finder
                .run_standard_hough(gray.as_view())
                .map_err(|e| format!("Baseline search failed: {e}"))?,
        )
    } else {
        None
    };

    let report = ToolReport {
        config_path,
        faster_hough: &faster,
        standard_hough: baseline.as_ref(),
    };
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Found {} lines on a {}x{} worksheet in {:.3} ms",
        faster.lines.len(),
        faster.input.worksheet_width,
        faster.input.worksheet_height,
        faster.timing.total_ms
    );
    if let Some(baseline) = &baseline {
        println!(
            "Standard Hough baseline: {} lines in {:.3} ms",
            baseline.lines.len(),
            baseline.timing.total_ms
        );
    }
    println!("Saved report to {}", config.output.report_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: hough_lines <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolReport<'a> {
    config_path: String,
    faster_hough: &'a faster_hough::finder::FinderReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard_hough: Option<&'a faster_hough::finder::FinderReport>,
}
