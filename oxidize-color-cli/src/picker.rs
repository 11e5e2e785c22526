//! Front-end adapter for the conversion library.
//!
//! A [`ColorPicker`] receives color input events, converts each one through
//! [`ColorReport`], hands the text forms to a [`ColorSink`] and optionally puts
//! one representation on a [`Clipboard`]. Both collaborators are injected, so
//! the conversion path never touches a terminal or system clipboard directly.

use anyhow::{anyhow, Context, Result};
use oxidize_color::{ColorFormat, ColorReport};
use std::io::{self, BufRead, Write};
#[cfg(feature = "clipboard")]
use std::time::Duration;
#[cfg(all(feature = "clipboard", target_os = "linux"))]
use std::time::Instant;
use tracing::{debug, info, warn};

/// Where rendered colors go.
pub trait ColorSink {
    /// One line of regular output.
    fn show_line(&mut self, line: &str) -> io::Result<()>;

    /// A failed conversion or copy.
    fn show_error(&mut self, message: &str) -> io::Result<()>;

    /// Status feedback, such as a completed copy.
    fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Writes output lines to `out` and errors and notices to `err`.
pub struct WriterSink<O: Write, E: Write> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> WriterSink<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }
}

impl WriterSink<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ColorSink for WriterSink<O, E> {
    fn show_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "error: {message}")
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{message}")
    }
}

/// Text destination for the copy affordance.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard (X11/Wayland, macOS, Windows).
///
/// The connection is made on the first copy, so a missing display only fails
/// the copy itself.
#[cfg(feature = "clipboard")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// On Linux the copied text is only served while this process owns the
    /// selection. Keep serving it for up to `hold` after each copy, or until
    /// another application takes the selection over.
    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = (!hold.is_zero()).then_some(hold);
        self
    }

    #[cfg(target_os = "linux")]
    fn write(&self, clipboard: &mut arboard::Clipboard, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        match self.hold {
            Some(hold) => clipboard
                .set()
                .wait_until(Instant::now() + hold)
                .text(text)?,
            None => clipboard.set_text(text)?,
        }
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn write(&self, clipboard: &mut arboard::Clipboard, text: &str) -> Result<()> {
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("Clipboard is not available")?,
        };

        let written = self
            .write(&mut clipboard, text)
            .context("Failed to write to clipboard");
        self.inner = Some(clipboard);
        written
    }
}

/// How a [`ColorPicker`] renders each color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Only render this representation; all of them when `None`.
    pub format: Option<ColorFormat>,
    /// Render JSON instead of text.
    pub json: bool,
    /// Copy this representation to the clipboard after rendering.
    pub copy: Option<ColorFormat>,
}

impl DisplayOptions {
    pub fn with_format(mut self, format: Option<ColorFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_copy(mut self, copy: Option<ColorFormat>) -> Self {
        self.copy = copy;
        self
    }
}

pub struct ColorPicker<S: ColorSink> {
    sink: S,
    clipboard: Option<Box<dyn Clipboard>>,
    options: DisplayOptions,
}

impl<S: ColorSink> ColorPicker<S> {
    pub fn new(sink: S, options: DisplayOptions) -> Self {
        Self {
            sink,
            clipboard: None,
            options,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Option<Box<dyn Clipboard>>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Handles one color change: convert, render, then copy if requested.
    /// The color is rendered even when the copy fails.
    pub fn on_input(&mut self, hex: &str) -> Result<ColorReport> {
        let report = self.show(hex)?;

        if let Some(format) = self.options.copy {
            self.copy(&report, format)?;
        }

        Ok(report)
    }

    /// Converts and renders one color without touching the clipboard.
    pub fn show(&mut self, hex: &str) -> Result<ColorReport> {
        let report =
            ColorReport::from_hex(hex).with_context(|| format!("Cannot convert {hex:?}"))?;
        debug!(input = hex, hex = %report.hex, "color changed");

        self.render(&report)?;
        Ok(report)
    }

    pub fn render(&mut self, report: &ColorReport) -> Result<()> {
        match (self.options.format, self.options.json) {
            (None, false) => {
                for line in report.to_string().lines() {
                    self.sink.show_line(line)?;
                }
            }
            (Some(format), false) => self.sink.show_line(&report.get(format))?,
            (None, true) => self.sink.show_line(&serde_json::to_string(report)?)?,
            (Some(format), true) => {
                let value = serde_json::json!({ format.name(): report.get(format) });
                self.sink.show_line(&value.to_string())?;
            }
        }
        Ok(())
    }

    /// Puts one representation of `report` on the clipboard.
    pub fn copy(&mut self, report: &ColorReport, format: ColorFormat) -> Result<()> {
        let text = report.get(format);
        self.clipboard
            .as_mut()
            .ok_or_else(|| anyhow!("Clipboard is not available"))
            .and_then(|clipboard| clipboard.set_text(&text))
            .with_context(|| format!("Cannot copy {} value", format.label()))?;

        info!(format = %format, text = %text, "copied to clipboard");
        self.sink
            .notify(&format!("Copied {} {text}", format.label()))?;
        Ok(())
    }

    /// Treats every non-empty line of `input` as a color change. Conversion
    /// failures are reported to the sink and copy failures are logged; neither
    /// stops the loop. Returns how many lines converted successfully.
    pub fn watch<R: BufRead>(&mut self, input: R) -> Result<usize> {
        let mut converted = 0;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let hex = line.trim();
            if hex.is_empty() {
                continue;
            }

            let report = match self.show(hex) {
                Ok(report) => report,
                Err(err) => {
                    debug!(input = hex, "{err:#}");
                    self.sink.show_error(&format!("{err:#}"))?;
                    continue;
                }
            };
            converted += 1;

            if let Some(format) = self.options.copy {
                if let Err(err) = self.copy(&report, format) {
                    warn!(input = hex, "{err:#}");
                }
            }
        }

        Ok(converted)
    }
}
