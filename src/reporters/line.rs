use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream, Style};
use tracing::warn;

use super::Reporter;
use crate::metrics::{Metric, MetricFmtAdapter};

/// Writes one `<label>: <value> <unit>` line per measurement.
///
/// With [`WallClock`](crate::WallClock) that's `<label>: <millis> ms`.
pub struct LineReporter<W: Write> {
    out: W,
    pub format_options: FormatOptions,
}

impl LineReporter<io::Stdout> {
    /// Styled output on stdout.
    ///
    /// Styles only kick in when stdout supports color; redirected output
    /// stays plain.
    pub fn stdout() -> Self {
        LineReporter {
            out: io::stdout(),
            format_options: FormatOptions {
                styled: true,
                ..Default::default()
            },
        }
    }
}

impl<W: Write> LineReporter<W> {
    pub fn new_with_io_write(out: W) -> Self {
        LineReporter {
            out,
            format_options: Default::default(),
        }
    }

    pub fn set_format_options(mut self, options: FormatOptions) -> Self {
        self.format_options = options;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub styled: bool,
    pub label_style: Style,
    pub value_style: Style,
    pub unit_style: Style,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            styled: false,
            label_style: Style::new().cyan().bold(),
            value_style: Style::new().green().bold(),
            unit_style: Style::new().dimmed(),
        }
    }
}

impl<W: Write, M: Metric> Reporter<M> for LineReporter<W> {
    fn measured(&mut self, label: &'static str, measurement: M::Unit) {
        let value = MetricFmtAdapter::<M>::new(&measurement);
        let o = self.format_options;

        let res = if o.styled {
            writeln!(
                self.out,
                "{}: {} {}",
                label.if_supports_color(Stream::Stdout, |l| l.style(o.label_style)),
                value.if_supports_color(Stream::Stdout, |v| v.style(o.value_style)),
                M::UNIT_NAME.if_supports_color(Stream::Stdout, |u| u.style(o.unit_style)),
            )
        } else {
            writeln!(self.out, "{}: {} {}", label, value, M::UNIT_NAME)
        };

        if let Err(err) = res {
            warn!(%err, label, "failed to write measurement");
        }
    }

    fn ended(&mut self) {
        if let Err(err) = self.out.flush() {
            warn!(%err, "failed to flush reporter output");
        }
    }
}
