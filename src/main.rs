mod app;
mod counts;
mod heatmap;
mod help;
mod theme;
use crate::app::App;
use crate::counts::CountMap;
use crate::heatmap::{MonthRef, MonthView};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        month: Option<MonthRef>,
        counts: Option<PathBuf>,
        select: Option<Date>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut month = None;
        let mut counts = None;
        let mut select = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("counts") => {
                    counts = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('s') | Arg::Long("select") => {
                    let value = parser.value()?.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => select = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                Arg::Value(value) if month.is_none() => {
                    let value = value.string()?;
                    match value.parse::<MonthRef>() {
                        Ok(m) => month = Some(m),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            month,
            counts,
            select,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                month,
                counts,
                select,
            } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let month = month.unwrap_or_else(|| MonthRef::from_date(today));
                let counts = match counts {
                    Some(path) => CountMap::load(&path).with_context(|| {
                        format!("failed to load counts from {}", path.display())
                    })?,
                    None => CountMap::default(),
                };
                let mut view = MonthView::new(month, &counts, today);
                if let Some(date) = select {
                    view.select_date(date);
                }
                let picked = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    Ok(App::new(view, counts, today).run(&mut terminal)?)
                })?;
                if let Some(date) = picked {
                    println!("{date}");
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: heatmonth [-c FILE] [-s DATE] [MONTH]");
                println!();
                println!("Interactive terminal month-view heatmap of daily activity counts");
                println!();
                println!("Arguments:");
                println!("  [MONTH]    Month to display, as YYYY-MM (defaults to the current month)");
                println!();
                println!("Options:");
                println!("  -c, --counts FILE   JSON file mapping YYYY-MM-DD dates to activity counts");
                println!("  -s, --select DATE   Day to select initially, as YYYY-MM-DD");
                println!("  -h, --help          Display this help message and exit");
                println!("  -V, --version       Show the program version and exit");
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

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
