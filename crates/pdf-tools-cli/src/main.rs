use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdft", about = "PDF tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine images into a paginated PDF
    Images {
        /// Input image file(s), in document order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file [default: converted-images.pdf]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Load settings from a JSON file; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the effective settings to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Output paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Output orientation
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,

        /// How many images share a page
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        /// Border and gutter width in mm
        #[arg(long)]
        padding: Option<f32>,

        /// Border color as #rrggbb
        #[arg(long)]
        border_color: Option<String>,

        /// Border style
        #[arg(long, value_enum)]
        border_style: Option<BorderStyleArg>,

        /// JPEG quality of embedded images (1-100)
        #[arg(long)]
        quality: Option<u8>,

        /// Rotate one image, as INDEX:DEGREES (e.g. 0:90); repeatable
        #[arg(long, value_parser = parse_rotation)]
        rotate: Vec<(usize, pdf_images::Rotation)>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Full,
    Single,
    Double,
    Quad,
}

#[derive(Clone, Copy, ValueEnum)]
enum BorderStyleArg {
    None,
    Solid,
    Dashed,
    Dotted,
}

impl From<PaperArg> for pdf_images::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_images::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<LayoutArg> for pdf_images::LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Full => Self::Full,
            LayoutArg::Single => Self::Single,
            LayoutArg::Double => Self::Double,
            LayoutArg::Quad => Self::Quad,
        }
    }
}

impl From<BorderStyleArg> for pdf_images::BorderStyle {
    fn from(arg: BorderStyleArg) -> Self {
        match arg {
            BorderStyleArg::None => Self::None,
            BorderStyleArg::Solid => Self::Solid,
            BorderStyleArg::Dashed => Self::Dashed,
            BorderStyleArg::Dotted => Self::Dotted,
        }
    }
}

fn parse_rotation(value: &str) -> std::result::Result<(usize, pdf_images::Rotation), String> {
    let (index, degrees) = value
        .split_once(':')
        .ok_or_else(|| format!("expected INDEX:DEGREES, got '{}'", value))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid image index '{}': {}", index, e))?;
    let degrees = degrees
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid degrees '{}': {}", degrees, e))?;
    let rotation = pdf_images::Rotation::from_degrees(degrees)
        .ok_or_else(|| format!("rotation must be a multiple of 90, got {}", degrees))?;
    Ok((index, rotation))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Images {
            input,
            output,
            config,
            save_config,
            paper,
            orientation,
            layout,
            padding,
            border_color,
            border_style,
            quality,
            rotate,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => pdf_images::ConversionOptions::load(path)
                    .await
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => pdf_images::ConversionOptions::default(),
            };

            if let Some(paper) = paper {
                options.paper_size = paper.into();
            }
            if let Some(orientation) = orientation {
                options.orientation = orientation.into();
            }
            if let Some(layout) = layout {
                options.layout_mode = layout.into();
            }
            if let Some(padding) = padding {
                options.padding_mm = padding;
            }
            if let Some(color) = border_color {
                options.border_color = pdf_images::Color::from_hex(&color)?;
            }
            if let Some(style) = border_style {
                options.border_style = style.into();
            }
            if let Some(quality) = quality {
                options.quality = quality;
            }
            options.validate()?;

            if let Some(path) = &save_config {
                options.save(path).await?;
                info!("Saved settings to {}", path.display());
            }

            let mut state = pdf_images::DocumentState::new(options);
            state.extend(pdf_images::load_images(&input).await?);
            for (index, rotation) in rotate {
                state
                    .set_rotation(index, rotation)
                    .context("applying --rotate")?;
            }

            let stats = pdf_images::calculate_statistics(&state.specs(), &state.options)?;
            println!("Conversion Statistics:");
            println!("  Images: {}", stats.images);
            println!("  Layout: {:?}", stats.layout_mode);
            println!("  Output pages: {}", stats.pages);
            for (page, count) in stats.images_per_page.iter().enumerate() {
                println!("    Page {}: {} image(s)", page + 1, count);
            }

            if stats_only {
                return Ok(());
            }

            let output = output.unwrap_or_else(|| pdf_images::default_output_path("."));
            let doc = pdf_images::convert_document(&state).await?;
            pdf_images::save_pdf(doc, &output).await?;
            println!("Converted → {}", output.display());
        }
    }

    Ok(())
}
