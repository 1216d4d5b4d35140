use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lvforge::convert::{run_job, ConvertJob, Emit};
use lvforge::manifest::Manifest;
use lvimg_codec::ColorFormat;

#[derive(Parser)]
#[command(name = "lvforge")]
#[command(about = "Converts raster images into LVGL image assets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single image
    Convert {
        /// Input image file (PNG)
        input: PathBuf,

        /// Target color format (see `lvforge formats`)
        #[arg(short, long, default_value = "true_color_565")]
        format: String,

        /// Disable error-diffusion dithering
        #[arg(long)]
        no_dither: bool,

        /// Append an alpha byte after each true-color pixel
        #[arg(short, long)]
        alpha: bool,

        /// Which outputs to produce
        #[arg(short, long, value_enum, default_value_t = Emit::CArray)]
        emit: Emit,

        /// Identifier override (defaults to the input file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Convert every image listed in a YAML manifest
    Batch {
        /// Manifest file
        manifest: PathBuf,
    },
    /// List the supported color format names
    Formats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lvforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert {
            input,
            format,
            no_dither,
            alpha,
            emit,
            name,
            output,
        } => {
            let job = ConvertJob {
                input,
                format: format.parse::<ColorFormat>()?,
                dither: !no_dither,
                alpha_byte: alpha,
                emit,
                name,
            };
            let written = run_job(&job, &output)?;
            for path in written {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Batch { manifest } => {
            let base_dir = manifest
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let parsed = Manifest::load(&manifest)?;
            let jobs = parsed.jobs(&base_dir)?;
            let out_dir = if parsed.output_dir.is_absolute() {
                parsed.output_dir.clone()
            } else {
                base_dir.join(&parsed.output_dir)
            };

            let mut total = 0usize;
            for job in &jobs {
                let written = run_job(job, &out_dir)?;
                total += written.len();
                for path in written {
                    println!("{}", path.display());
                }
            }
            println!("Converted {} images ({total} files)", jobs.len());
            Ok(())
        }
        Commands::Formats => {
            for format in ColorFormat::PACKABLE {
                println!("{format}");
            }
            Ok(())
        }
    }
}
