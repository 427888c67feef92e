//! ThermoFlow CLI - Run a headless simulation from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rand::Rng;

use thermoflow::{
    compute::{Field, brush},
    render::FrameStats,
    runner::SimulationLoop,
    schema::{Palette, SimulationConfig},
};

/// Trailing stats window retained for display, matching the browser chart.
const MAX_HISTORY_LENGTH: usize = 50;

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [frames]", args[0]);
        eprintln!();
        eprintln!("Run a headless ThermoFlow simulation from JSON configuration.");
        eprintln!("A wandering brush stands in for pointer input.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  frames       Number of displayed frames (default: 300)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let frames: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(300);

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }
    if !config.is_stable() {
        eprintln!(
            "Warning: alpha {} exceeds the stability limit of {}",
            config.alpha,
            thermoflow::schema::ALPHA_STABILITY_LIMIT
        );
    }

    println!("ThermoFlow Simulation");
    println!("=====================");
    println!("Grid: {}x{}", config.resolution, config.resolution);
    println!(
        "alpha: {}  damping: {}  steps/frame: {}",
        config.alpha, config.damping, config.iterations_per_frame
    );
    println!("Frames: {}", frames);
    println!();

    let mut field = Field::new(config.resolution).unwrap_or_else(|e| {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    });
    let mut sim = SimulationLoop::new(Palette::default());
    let mut history: VecDeque<FrameStats> = VecDeque::with_capacity(MAX_HISTORY_LENGTH);

    // Wandering brush: a random walk over the interior stands in for the
    // pointer, held down for the first half of the run.
    let mut rng = rand::thread_rng();
    let span = config.resolution as f32;
    let (mut bx, mut by) = (span / 2.0, span / 2.0);

    println!("Running simulation...");
    let start = Instant::now();

    for frame in 0..frames {
        if frame < frames / 2 {
            bx = (bx + rng.gen_range(-2.0..=2.0)).clamp(1.0, span - 2.0);
            by = (by + rng.gen_range(-2.0..=2.0)).clamp(1.0, span - 2.0);
            brush::inject(&mut field, bx, by, config.brush_size, config.brush_intensity);
        }

        if let Some(stats) = sim.tick(&mut field, &config) {
            if history.len() == MAX_HISTORY_LENGTH {
                history.pop_front();
            }
            history.push_back(stats);
        }

        // Print progress every 10%
        if (frame + 1) % (frames / 10).max(1) == 0 {
            let elapsed = start.elapsed().as_secs_f32();
            let fps = (frame + 1) as f32 / elapsed;
            let latest = history.back();
            println!(
                "  Frame {}/{}: iteration={}, max={:.4}, total={:.4}, {:.1} frames/s",
                frame + 1,
                frames,
                field.iteration(),
                latest.map_or(0.0, |s| s.max_temp),
                latest.map_or(0.0, |s| s.total_energy),
                fps
            );
        }
    }

    let elapsed = start.elapsed();

    println!();
    println!("Final state:");
    println!("  Iterations: {}", field.iteration());
    println!("  Stats samples retained: {}", history.len());
    if let Some(stats) = history.back() {
        println!("  Max temp: {:.6}", stats.max_temp);
        println!("  Avg temp: {:.6}", stats.avg_temp);
        println!("  Total energy: {:.6}", stats.total_energy);
    }
    println!();
    println!(
        "Time: {:.2}s ({:.1} frames/s)",
        elapsed.as_secs_f32(),
        frames as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = SimulationConfig::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
