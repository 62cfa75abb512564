use lane_tracker::config::demo::{self, LaneDemoConfig};
use lane_tracker::diagnostics::SequenceReport;
use lane_tracker::image::io::{load_mask_image, load_rgb_image, save_mask_image, save_rgb_image, write_json_file};
use lane_tracker::{FrameProcessor, WarpDirection};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <config.json>")
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "lane_demo".to_string());
    let config_path = args.next().ok_or_else(|| usage(&program))?;
    let config = demo::load_config(Path::new(&config_path))?;

    let sequence = process_frames(&config)?;
    print_sequence_summary(&sequence);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &sequence)?;
        println!("JSON report written to {}", path.display());
    }
    println!("Overlay frames written to {}", config.output.dir.display());
    Ok(())
}

fn process_frames(config: &LaneDemoConfig) -> Result<SequenceReport, String> {
    let mut processor = FrameProcessor::new(config.params.clone()).map_err(|e| e.to_string())?;
    let mut sequence = SequenceReport::default();

    for (idx, frame) in config.frames.iter().enumerate() {
        let image = load_rgb_image(&frame.image)?;
        let mask = load_mask_image(&frame.mask, config.mask_threshold)?;
        let out = processor
            .process(&image, &mask)
            .map_err(|e| format!("Frame {idx} ({}): {e}", frame.image.display()))?;
        println!("{}", out.report.summary());

        let dir = &config.output.dir;
        save_rgb_image(&out.image, &dir.join(format!("overlay_{idx:04}.png")))?;
        if config.output.save_birdseye {
            let birdseye = processor.mapper().warp_mask(&mask, WarpDirection::ToBirdsEye);
            save_mask_image(&birdseye, &dir.join(format!("birdseye_{idx:04}.png")))?;
        }
        sequence.push(out.report);
    }

    Ok(sequence)
}

fn print_sequence_summary(sequence: &SequenceReport) {
    let c = &sequence.counts;
    println!("\nSequence summary ({} frames)", c.total());
    println!("  initialized: {}", c.initialized);
    println!("  initialization_failed: {}", c.initialization_failed);
    println!("  tracked: {}", c.tracked);
    println!("  recovered: {}", c.recovered);
    println!("  lost: {}", c.lost);
    println!("  frames_with_overlay: {}", sequence.frames_with_overlay);

    let total_ms: f64 = sequence.frames.iter().map(|f| f.timings.total_ms).sum();
    if !sequence.frames.is_empty() {
        println!(
            "  mean_latency_ms: {:.3}",
            total_ms / sequence.frames.len() as f64
        );
    }
}
