//! rasterlab CLI: apply engine operators to image files.

mod config;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rasterlab_codec::{load, recompress, save};
use rasterlab_core::frequency::{dct_magnitude_with, determinant_response_with, dft_magnitude_with};
use rasterlab_core::{
    EngineConfig, Histogram, PixelGrid, approximate_canny_with, blur, enhance, equalize, render,
    sharpen, sobel, stretch, to_gray,
};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "rasterlab")]
#[command(
    about = "Filter, edge-detect, equalize and inspect the spectrum of raster images"
)]
#[command(version)]
struct Cli {
    /// JSON engine config with tunable thresholds and caps.
    /// Falls back to $RASTERLAB_CONFIG, then to built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Args)]
struct IoArgs {
    /// Path to the input image.
    #[arg(long)]
    input: PathBuf,

    /// Path to write the result; the extension picks the format.
    #[arg(long)]
    output: PathBuf,

    /// Encoder quality in [0, 1]. Only JPEG output uses it.
    #[arg(long, default_value = "0.9")]
    quality: f32,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert to grayscale luminance.
    Gray(IoArgs),

    /// Box blur over a (2r+1)² window.
    Blur {
        #[command(flatten)]
        io: IoArgs,

        /// Blur radius in pixels; 0 or less copies the image.
        #[arg(long, default_value = "2", allow_hyphen_values = true)]
        radius: i32,
    },

    /// Laplacian sharpen.
    Sharpen {
        #[command(flatten)]
        io: IoArgs,

        /// Strength multiplier, clamped to [0.1, 5.0].
        #[arg(long, default_value = "1.0")]
        strength: f32,
    },

    /// Linear contrast and brightness adjustment.
    Enhance {
        #[command(flatten)]
        io: IoArgs,

        /// Contrast factor (1.0 = unchanged).
        #[arg(long, default_value = "1.0")]
        contrast: f32,

        /// Brightness offset in [-255, 255].
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        brightness: f32,
    },

    /// Sobel gradient magnitude.
    Sobel(IoArgs),

    /// Threshold-only approximate Canny edges.
    Canny(IoArgs),

    /// Render the luminance histogram as a bar chart.
    Histogram {
        #[command(flatten)]
        io: IoArgs,

        /// Also write the 256 raw bin counts as JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Histogram equalization.
    Equalize(IoArgs),

    /// Contrast stretch to the full [0, 255] range.
    Stretch(IoArgs),

    /// Log-magnitude DFT view (downsampled).
    Dft(IoArgs),

    /// Log-magnitude DCT-II view (downsampled).
    Dct(IoArgs),

    /// 3×3 local determinant response.
    Determinant(IoArgs),

    /// Preview JPEG compression artifacts at --quality.
    Recompress(IoArgs),
}

impl Commands {
    fn io(&self) -> &IoArgs {
        match self {
            Self::Gray(io)
            | Self::Sobel(io)
            | Self::Canny(io)
            | Self::Equalize(io)
            | Self::Stretch(io)
            | Self::Dft(io)
            | Self::Dct(io)
            | Self::Determinant(io)
            | Self::Recompress(io) => io,
            Self::Blur { io, .. }
            | Self::Sharpen { io, .. }
            | Self::Enhance { io, .. }
            | Self::Histogram { io, .. } => io,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Gray(_) => "gray",
            Self::Blur { .. } => "blur",
            Self::Sharpen { .. } => "sharpen",
            Self::Enhance { .. } => "enhance",
            Self::Sobel(_) => "sobel",
            Self::Canny(_) => "canny",
            Self::Histogram { .. } => "histogram",
            Self::Equalize(_) => "equalize",
            Self::Stretch(_) => "stretch",
            Self::Dft(_) => "dft",
            Self::Dct(_) => "dct",
            Self::Determinant(_) => "determinant",
            Self::Recompress(_) => "recompress",
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    run(&cli.command, &config)
}

fn run(command: &Commands, config: &EngineConfig) -> CliResult<()> {
    let io = command.io();
    tracing::info!("Loading image: {}", io.input.display());
    let grid = load(&io.input)
        .map_err(|e| -> CliError { format!("failed to open {}: {e}", io.input.display()).into() })?;
    tracing::info!(
        "Image size: {}x{} ({})",
        grid.width(),
        grid.height(),
        grid.layout()
    );

    if let Commands::Histogram {
        json: Some(path), ..
    } = command
    {
        write_histogram_json(&grid, path)?;
    }

    let result = apply(command, &grid, config)?;
    save(&result, &io.output, io.quality)?;
    tracing::info!(
        "{}: wrote {}x{} to {}",
        command.name(),
        result.width(),
        result.height(),
        io.output.display()
    );
    Ok(())
}

/// Run the operator selected by `command` on an in-memory grid.
fn apply(command: &Commands, grid: &PixelGrid, config: &EngineConfig) -> CliResult<PixelGrid> {
    let out = match command {
        Commands::Gray(_) => to_gray(grid)?,
        Commands::Blur { radius, .. } => blur(grid, *radius)?,
        Commands::Sharpen { strength, .. } => sharpen(grid, *strength)?,
        Commands::Enhance {
            contrast,
            brightness,
            ..
        } => enhance(grid, *contrast, *brightness)?,
        Commands::Sobel(_) => sobel(grid)?,
        Commands::Canny(_) => approximate_canny_with(grid, &config.canny)?,
        Commands::Histogram { .. } => render(&Histogram::compute(grid)?),
        Commands::Equalize(_) => equalize(grid)?,
        Commands::Stretch(_) => stretch(grid)?,
        Commands::Dft(_) => dft_magnitude_with(grid, &config.spectrum)?,
        Commands::Dct(_) => dct_magnitude_with(grid, &config.spectrum)?,
        Commands::Determinant(_) => determinant_response_with(grid, &config.determinant)?,
        Commands::Recompress(io) => recompress(grid, io.quality)?,
    };
    Ok(out)
}

fn write_histogram_json(grid: &PixelGrid, path: &Path) -> CliResult<()> {
    let hist = Histogram::compute(grid)?;
    let json = serde_json::to_string(&hist)?;
    std::fs::write(path, json)?;
    tracing::info!(
        "histogram: {} pixels, peak {} -> {}",
        hist.total(),
        hist.peak(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::ColorLayout;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["rasterlab"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    fn scene() -> PixelGrid {
        PixelGrid::from_gray_fn(16, 12, |x, y| if x > 5 && y > 4 { 210 } else { 30 })
    }

    #[test]
    fn test_parse_blur_with_negative_radius() {
        let cli = parse(&["blur", "--input", "a.png", "--output", "b.png", "--radius", "-1"]);
        match &cli.command {
            Commands::Blur { radius, io } => {
                assert_eq!(*radius, -1);
                assert_eq!(io.quality, 0.9);
            }
            _ => panic!("expected blur"),
        }
        assert_eq!(apply(&cli.command, &scene(), &EngineConfig::default()).unwrap(), scene());
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = parse(&["sobel", "--input", "a.png", "--output", "b.png", "--config", "c.json"]);
        assert_eq!(cli.config.as_deref(), Some(Path::new("c.json")));
        assert_eq!(cli.command.name(), "sobel");
    }

    #[test]
    fn test_every_operator_runs_on_a_scene() {
        let config = EngineConfig::default();
        let commands: &[&[&str]] = &[
            &["gray"],
            &["blur"],
            &["sharpen", "--strength", "2.5"],
            &["enhance", "--contrast", "1.2", "--brightness", "-10"],
            &["sobel"],
            &["canny"],
            &["histogram"],
            &["equalize"],
            &["stretch"],
            &["dft"],
            &["dct"],
            &["determinant"],
            &["recompress", "--quality", "0.5"],
        ];
        for cmd in commands {
            let mut args = cmd.to_vec();
            args.extend_from_slice(&["--input", "in.png", "--output", "out.png"]);
            let cli = parse(&args);
            let out = apply(&cli.command, &scene(), &config).unwrap();
            assert!(!out.is_empty(), "{} produced an empty grid", cli.command.name());
        }
    }

    #[test]
    fn test_histogram_command_renders_chart() {
        let cli = parse(&["histogram", "--input", "a.png", "--output", "h.png"]);
        let out = apply(&cli.command, &scene(), &EngineConfig::default()).unwrap();
        assert_eq!((out.width(), out.height()), (512, 200));
        assert_eq!(out.layout(), ColorLayout::Rgb);
    }

    #[test]
    fn test_engine_errors_surface() {
        let cli = parse(&["sharpen", "--input", "a", "--output", "b", "--strength", "NaN"]);
        assert!(apply(&cli.command, &scene(), &EngineConfig::default()).is_err());
    }
}
