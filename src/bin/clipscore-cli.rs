use std::{collections::HashMap, fs, path::Path, path::PathBuf, time::Duration};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use clipscore::{FfmpegLogLevel, MediaClip, Report, ScoreWeights};

const CLI_AFTER_HELP: &str = "Examples:\n  clipscore analyze clip.mp4\n  clipscore analyze clip.mp4 --json\n  clipscore analyze clip.mp4 --weights weights.json --poster poster.png\n  clipscore metadata clip.mp4 --json\n  clipscore completions zsh > _clipscore";

const SCORE_BAR_WIDTH: usize = 40;

// The page this tool replaces always printed the same publishing tip;
// it is informational, not computed from the clip.
const PUBLISH_TIP: &str = "Recommended publish window: 7pm-9pm (platform peak activity)";

#[derive(Debug, Parser)]
#[command(
    name = "clipscore",
    version,
    about = "Score short video clips for virality potential",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Allow overwriting existing output files.
    #[arg(long)]
    overwrite: bool,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a clip and print its report.
    #[command(
        about = "Analyze a clip",
        visible_alias = "score",
        after_help = "Examples:\n  clipscore analyze clip.mp4\n  clipscore analyze clip.mp4 --json\n  clipscore analyze clip.mp4 --weights weights.json"
    )]
    Analyze {
        /// Input media path.
        input: String,

        /// Output the report as machine-readable JSON.
        #[arg(long)]
        json: bool,

        /// JSON file mapping feature names to weight coefficients.
        #[arg(long)]
        weights: Option<PathBuf>,

        /// Also save the first frame as an image at this path.
        #[arg(long)]
        poster: Option<PathBuf>,
    },

    /// Print metadata for a media file (alias: probe).
    #[command(
        about = "Print media metadata",
        visible_alias = "probe",
        after_help = "Examples:\n  clipscore metadata clip.mp4\n  clipscore metadata clip.mp4 --json"
    )]
    Metadata {
        /// Input media path.
        input: String,

        /// Output metadata as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_log_level(value: &str) -> Option<FfmpegLogLevel> {
    match value.to_ascii_lowercase().as_str() {
        "quiet" => Some(FfmpegLogLevel::Quiet),
        "panic" => Some(FfmpegLogLevel::Panic),
        "fatal" => Some(FfmpegLogLevel::Fatal),
        "error" => Some(FfmpegLogLevel::Error),
        "warning" | "warn" => Some(FfmpegLogLevel::Warning),
        "info" => Some(FfmpegLogLevel::Info),
        "verbose" => Some(FfmpegLogLevel::Verbose),
        "debug" => Some(FfmpegLogLevel::Debug),
        "trace" => Some(FfmpegLogLevel::Trace),
        _ => None,
    }
}

fn apply_global_options(global: &GlobalOptions) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(level) = &global.log_level {
        let parsed = parse_log_level(level).ok_or(format!("unsupported --log-level: {level}"))?;
        clipscore::set_ffmpeg_log_level(parsed);
    }
    Ok(())
}

fn ensure_writable_path(path: &Path, overwrite: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        if overwrite {
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("overwriting {}", path.display()).yellow()
            );
        } else {
            return Err(format!(
                "output already exists: {} (use --overwrite to replace)",
                path.display()
            )
            .into());
        }
    }
    Ok(())
}

fn load_weights(path: &Path) -> Result<ScoreWeights, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let map: HashMap<String, f64> = serde_json::from_str(&contents)?;
    Ok(ScoreWeights::from_map(&map)?)
}

fn score_bar(score: f64) -> String {
    let filled = ((score / 100.0) * SCORE_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(SCORE_BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(SCORE_BAR_WIDTH - filled)
    )
}

fn print_report(report: &Report) {
    let features = &report.features;

    println!("{}", "Clip checkup".bold());
    println!("  Duration:   {:.1} s", features.duration_seconds);
    println!("  Brightness: {}", features.brightness as i64);
    println!("  Motion:     {}", features.motion as i64);
    println!();

    println!("{}", "Virality score".bold());
    let bar = score_bar(report.score);
    let bar = if report.score >= 70.0 {
        bar.green()
    } else if report.score >= 40.0 {
        bar.yellow()
    } else {
        bar.red()
    };
    println!("  {bar}");
    println!("  {:.1} / 100", report.score);
    println!();

    if report.suggestions.is_empty() {
        println!("{}", "No suggestions - looking good.".green());
    } else {
        println!("{}", "Suggestions".bold());
        for suggestion in &report.suggestions {
            println!("  {} {}", "!".yellow().bold(), suggestion);
        }
    }
    println!();
    println!("{} {}", "tip:".cyan().bold(), PUBLISH_TIP);
}

fn report_to_json(report: &Report) -> serde_json::Value {
    json!({
        "features": {
            "duration_seconds": report.features.duration_seconds,
            "brightness": report.features.brightness,
            "motion": report.features.motion,
            "audio_volume": report.features.audio_volume,
        },
        "score": report.score,
        "suggestions": report
            .suggestions
            .iter()
            .map(|suggestion| suggestion.message())
            .collect::<Vec<_>>(),
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    apply_global_options(&cli.global)?;

    match cli.command {
        Commands::Analyze {
            input,
            json,
            weights,
            poster,
        } => {
            let weights = match weights {
                Some(path) => load_weights(&path)?,
                None => ScoreWeights::default(),
            };

            if let Some(path) = &poster {
                ensure_writable_path(path, cli.global.overwrite)?;
            }

            let spinner = if json {
                None
            } else {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
                spinner.set_message("analyzing clip...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                Some(spinner)
            };

            let mut clip = MediaClip::open(&input)?;
            let report = clip.analyze(&weights)?;

            let poster_saved = match &poster {
                Some(path) => {
                    let frame = clip.poster()?;
                    frame.save(path)?;
                    Some(path.clone())
                }
                None => None,
            };

            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report_to_json(&report))?);
            } else {
                print_report(&report);
                if let Some(path) = poster_saved {
                    println!("{} poster frame -> {}", "saved".green().bold(), path.display());
                }
            }
        }
        Commands::Metadata { input, json } => {
            let clip = MediaClip::open(&input)?;
            let metadata = clip.metadata();
            if json {
                let payload = json!({
                    "format": metadata.format,
                    "duration_seconds": metadata.duration.as_secs_f64(),
                    "video": metadata.video.as_ref().map(|video| json!({
                        "width": video.width,
                        "height": video.height,
                        "fps": video.frames_per_second,
                        "frame_count": video.frame_count,
                        "codec": video.codec,
                    })),
                    "audio": metadata.audio.as_ref().map(|audio| json!({
                        "sample_rate": audio.sample_rate,
                        "channels": audio.channels,
                        "codec": audio.codec,
                    })),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("Format: {}", metadata.format);
                println!("Duration: {:.2} s", metadata.duration.as_secs_f64());
                if let Some(video) = &metadata.video {
                    println!(
                        "Video: {}x{} @ {:.2} fps [{}]",
                        video.width, video.height, video.frames_per_second, video.codec,
                    );
                }
                if let Some(audio) = &metadata.audio {
                    println!(
                        "Audio: {} Hz, {} ch [{}]",
                        audio.sample_rate, audio.channels, audio.codec,
                    );
                }
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "clipscore", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
