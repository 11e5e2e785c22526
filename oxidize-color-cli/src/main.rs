use anyhow::Result;
use clap::{Parser, Subcommand};
use oxidize_color::ColorFormat;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod picker;

use picker::{Clipboard, ColorPicker, DisplayOptions, WriterSink};

#[derive(Parser)]
#[command(
    name = "oxidizecolor",
    about = "Convert hex colors to RGB, CMYK, HSV and HSL",
    version,
    author
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single hex color
    Convert {
        /// Hex color in #RRGGBB form (quote it in the shell)
        hex: String,

        /// Only print this representation (hex, rgb, cmyk, hsv, hsl)
        #[arg(short, long)]
        format: Option<ColorFormat>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Copy this representation to the clipboard
        #[arg(short, long)]
        copy: Option<ColorFormat>,

        /// Seconds to keep serving the copied text on X11/Wayland when no
        /// clipboard manager takes it over (0 exits right away)
        #[arg(long, default_value_t = 5, value_name = "SECONDS")]
        hold: u64,
    },

    /// Convert every hex color read from stdin, one per line
    Watch {
        /// Only print this representation (hex, rgb, cmyk, hsv, hsl)
        #[arg(short, long)]
        format: Option<ColorFormat>,

        /// Print one JSON object per color
        #[arg(long)]
        json: bool,

        /// Copy this representation of each color to the clipboard
        #[arg(short, long)]
        copy: Option<ColorFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            hex,
            format,
            json,
            copy,
            hold,
        } => {
            let options = DisplayOptions::default()
                .with_format(format)
                .with_json(json)
                .with_copy(copy);
            let clipboard = open_clipboard(copy, Duration::from_secs(hold));

            let mut picker = ColorPicker::new(WriterSink::stdio(), options).with_clipboard(clipboard);
            picker.on_input(&hex)?;
        }

        Commands::Watch { format, json, copy } => {
            let options = DisplayOptions::default()
                .with_format(format)
                .with_json(json)
                .with_copy(copy);
            let clipboard = open_clipboard(copy, Duration::ZERO);

            let mut picker = ColorPicker::new(WriterSink::stdio(), options).with_clipboard(clipboard);
            let converted = picker.watch(std::io::stdin().lock())?;
            tracing::info!(converted, "input closed");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "oxidizecolor=debug,oxidize_color=debug"
    } else {
        "oxidizecolor=warn,oxidize_color=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Prepares the system clipboard only when a copy was requested. Nothing
/// connects to the display until the first copy.
fn open_clipboard(copy: Option<ColorFormat>, hold: Duration) -> Option<Box<dyn Clipboard>> {
    copy.and_then(|_| system_clipboard(hold))
}

#[cfg(feature = "clipboard")]
fn system_clipboard(hold: Duration) -> Option<Box<dyn Clipboard>> {
    Some(Box::new(picker::SystemClipboard::new().with_hold(hold)))
}

#[cfg(not(feature = "clipboard"))]
fn system_clipboard(_hold: Duration) -> Option<Box<dyn Clipboard>> {
    tracing::warn!("oxidizecolor was built without clipboard support");
    None
}
