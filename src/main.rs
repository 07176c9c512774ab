mod app;
mod calendar;
mod entry;
mod help;
mod picker;
mod theme;
use crate::app::{App, Outcome};
use crate::calendar::{local_today, Bounds, CalendarDate};
use crate::picker::DatePicker;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunOptions {
    value: Option<CalendarDate>,
    bounds: Bounds,
    disabled: bool,
    log_file: Option<PathBuf>,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        let mut min: Option<CalendarDate> = None;
        let mut max: Option<CalendarDate> = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("min") => min = Some(parser.value()?.parse()?),
                Arg::Long("max") => max = Some(parser.value()?.parse()?),
                Arg::Long("disabled") => opts.disabled = true,
                Arg::Long("log-file") => opts.log_file = Some(parser.value()?.into()),
                Arg::Value(value) if opts.value.is_none() => opts.value = Some(value.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(lexopt::Error::Custom(
                    format!("--min {min} is later than --max {max}").into(),
                ));
            }
        }
        opts.bounds = Bounds::new(min, max);
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                // Determine the local date before anything starts another
                // thread, as the local offset cannot be read afterwards on
                // some platforms
                let today = local_today().context("failed to determine local date")?;
                let _logger = init_logging(opts.log_file.as_deref())?;
                let picker = DatePicker::new(today)
                    .bounds(opts.bounds)
                    .value(opts.value)
                    .disabled(opts.disabled);
                let outcome = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    Ok(App::new(picker).run(&mut terminal)?)
                })?;
                match outcome {
                    Outcome::Accepted(Some(date)) => println!("{date}"),
                    Outcome::Accepted(None) => (),
                    Outcome::Aborted => log::info!("Aborted by user"),
                }
                Ok(())
            }
            Command::Help => {
                println!(
                    "Usage: datepick [--min YYYY-MM-DD] [--max YYYY-MM-DD] [--disabled] [--log-file PATH] [YYYY-MM-DD]"
                );
                println!();
                println!("Pick a date from a terminal calendar and print it");
                println!();
                println!("Options:");
                println!("  --min DATE        Earliest date that may be chosen");
                println!("  --max DATE        Latest date that may be chosen");
                println!("  --disabled        Show the value without allowing changes");
                println!("  --log-file PATH   Write log messages to PATH; the level is read");
                println!("                    from $RUST_LOG (default: {DEFAULT_LOG_LEVEL})");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

// The terminal belongs to the UI, so messages are only logged when a log file
// is given.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<Option<LoggerHandle>> {
    let Some(path) = log_file else {
        return Ok(None);
    };
    let handle = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
        .context("invalid log specification")?
        .log_to_file(FileSpec::try_from(path).context("invalid log file path")?)
        .start()
        .context("failed to start logger")?;
    log::debug!("Logging to {}", path.display());
    Ok(Some(handle))
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
