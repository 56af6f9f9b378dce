use faster_hough::prelude::*;

fn main() {
    // Demo: a synthetic 100x50 edge map with one horizontal and one vertical
    // segment, searched directly without preprocessing.
    let (w, h) = (100usize, 50usize);
    let mut edges = vec![0u8; w * h];
    for x in 10..90 {
        edges[25 * w + x] = 255;
    }
    for y in 5..45 {
        edges[y * w + 70] = 255;
    }
    let img = ImageU8::packed(w, h, &edges);

    let params = SearchParameters::default().with_vote_threshold(30);
    let engine = match LineSearchEngine::for_image(&img, params) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    match engine.search(img) {
        Ok(result) => {
            println!(
                "confirmed={} walked={} pruned={} elapsed_ms={:.3}",
                result.stats.confirmed,
                result.stats.cells_walked,
                result.stats.cells_pruned,
                result.stats.elapsed_ms
            );
            if let Some(best) = result.lines.iter().max_by_key(|l| l.votes) {
                let display = best.to_display();
                println!(
                    "strongest rho={:.1} theta_deg={:.2} votes={}",
                    display.rho, display.theta_deg, display.votes
                );
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
