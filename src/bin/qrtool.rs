use clap::{Parser, Subcommand};
use qr_gen::render::{DEFAULT_QUIET_ZONE, save_png, to_text};
use qr_gen::{ECLevel, EncodeOptions, QrEncoder};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR code generator CLI")]
struct Cli {
    /// Log encoder decisions (mode, version, mask penalties)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into a QR symbol
    Encode {
        text: String,
        /// Error correction level (L, M, Q, H)
        #[arg(long, default_value = "M")]
        ec: ECLevel,
        /// Minimum version (1-40), 0 for automatic
        #[arg(long, default_value_t = 0)]
        version: u8,
        /// Force a mask id (0-7)
        #[arg(long)]
        mask: Option<u8>,
        /// Pixels per module for image output
        #[arg(long, default_value_t = 8)]
        scale: u32,
        /// Quiet zone width in modules
        #[arg(long, default_value_t = DEFAULT_QUIET_ZONE)]
        border: u32,
        /// Write an image instead of printing to the terminal
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Encode {
            text,
            ec,
            version,
            mask,
            scale,
            border,
            output,
        } => {
            let options = EncodeOptions::new(ec)
                .with_version_hint(version)
                .with_mask_hint(mask);
            encode_cmd(&text, options, scale, border, output.as_deref())
        }
    }
}

fn encode_cmd(
    text: &str,
    options: EncodeOptions,
    scale: u32,
    border: u32,
    output: Option<&Path>,
) -> ExitCode {
    let symbol = match QrEncoder::new(options).encode(text) {
        Ok(symbol) => symbol,
        Err(err) => {
            eprintln!("Failed to encode: {err}");
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "version={} ec={:?} mask={} size={}",
        symbol.version().map_or(0, |v| v.number()),
        options.ec_level,
        symbol.mask().map_or(0, |m| m.id()),
        symbol.size()
    );

    match output {
        Some(path) => {
            if let Err(err) = save_png(&symbol, path, scale, border) {
                eprintln!("Failed to write {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", to_text(&symbol, border)),
    }
    ExitCode::SUCCESS
}
