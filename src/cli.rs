use std::{
    io::{self, Write},
    ops::RangeInclusive,
    path::PathBuf,
};

use anyhow::Context;
use clap::ArgAction;
use humanumber::{Config, Numeral};
use tracing::instrument;

/// Parse an inclusive range such as `1..=20` or `1..20`.
///
/// Both forms include the upper bound, since `999` is a valid number to speak.
fn parse_range(s: &str) -> Result<RangeInclusive<Numeral>, String> {
    let (start, end) = s
        .split_once("..=")
        .or_else(|| s.split_once(".."))
        .ok_or_else(|| format!("expected a range such as 1..=20, got '{s}'"))?;

    let start: Numeral = start.parse().map_err(|e| format!("{e}"))?;
    let end: Numeral = end.parse().map_err(|e| format!("{e}"))?;
    if start > end {
        return Err(format!("range start {start} is greater than range end {end}"));
    }
    Ok(start..=end)
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report invalid numbers and carry on with the rest
    #[arg(short, long)]
    keep_going: bool,

    /// Prefix each line with the number being converted
    #[arg(short, long)]
    echo: bool,

    /// Convert every number in an inclusive range, e.g. 1..=20
    #[arg(long, value_parser = parse_range)]
    range: Option<RangeInclusive<Numeral>>,

    /// The numbers to convert (0 to 999)
    #[arg(required_unless_present = "range", allow_negative_numbers = true)]
    numbers: Vec<String>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => Config::default(),
        };
        let config = config.with_overrides(self.keep_going, self.echo);

        self.convert(&config, &mut io::stdout().lock(), &mut io::stderr().lock())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries only the converted words
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }

    #[instrument(level = "debug", skip_all, fields(inputs = self.numbers.len()))]
    fn convert(
        &self,
        config: &Config,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> anyhow::Result<()> {
        let mut failures = 0usize;

        for input in &self.numbers {
            match input.parse::<Numeral>() {
                Ok(numeral) => Self::print(numeral, config, out)?,
                Err(e) if config.keep_going => {
                    tracing::warn!(input = %input, "skipping invalid number");
                    writeln!(err, "{input}: {e}")?;
                    failures += 1;
                }
                Err(e) => return Err(e).with_context(|| format!("cannot convert '{input}'")),
            }
        }

        if let Some(range) = &self.range {
            tracing::info!(start = %range.start(), end = %range.end(), "converting range");
            for value in range.start().value()..=range.end().value() {
                Self::print(Numeral::new(value)?, config, out)?;
            }
        }

        if failures > 0 {
            anyhow::bail!(
                "{failures} of {} inputs could not be converted",
                self.numbers.len()
            );
        }
        Ok(())
    }

    fn print(numeral: Numeral, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
        let words = numeral.words()?;
        if config.echo {
            writeln!(out, "{numeral}: {words}")?;
        } else {
            writeln!(out, "{words}")?;
        }
        Ok(())
    }
}
