use crate::app::App;
use crate::config::Config;
use crate::display::{display_alert, display_batch_summary, display_screen};
use crate::views::InputError;
use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr, bail};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod display;
mod loaders;
mod model;
mod state;
mod validation;
mod views;

const DEFAULT_CONFIG: &str = "prjtrack.toml";

#[derive(Parser)]
#[command(version, author, about)]
struct Options {
    /// Use FILE instead of prjtrack.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Set verbosity level (repeat for more)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Enter projects one by one on the terminal
    Interactive,
    /// Submit every row of a CSV file with a title,description,people header
    Batch {
        file: PathBuf,
        /// Do not fail when some rows are rejected
        #[arg(long)]
        keep_going: bool,
    },
    /// Submit a single project
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        people: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prjtrack={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(Path::new(DEFAULT_CONFIG)),
        None => Ok(Config::default()),
    }
}

/// Read one raw answer without its line terminator, `None` on end of
/// input.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<Vec<u8>>> {
    print!("{label}: ");
    std::io::stdout().flush()?;
    let mut answer = Vec::new();
    if input
        .read_until(b'\n', &mut answer)
        .wrap_err("cannot read from standard input")?
        == 0
    {
        return Ok(None);
    }
    if answer.ends_with(b"\n") {
        answer.pop();
        if answer.ends_with(b"\r") {
            answer.pop();
        }
    }
    Ok(Some(answer))
}

fn submit_answers(
    app: &mut App,
    title: Vec<u8>,
    description: Vec<u8>,
    people: Vec<u8>,
) -> Result<(), InputError> {
    match (
        String::from_utf8(title),
        String::from_utf8(description),
        String::from_utf8(people),
    ) {
        (Ok(title), Ok(description), Ok(people)) => {
            app.submit(&title, &description, &people).map(|_| ())
        }
        _ => {
            warn!("answer is not valid UTF-8");
            Err(InputError::Invalid)
        }
    }
}

fn interactive(app: &mut App, mut input: impl BufRead) -> Result<()> {
    display_screen(app);
    loop {
        let Some(title) = prompt(&mut input, "Title")? else {
            break;
        };
        let Some(description) = prompt(&mut input, "Description")? else {
            break;
        };
        let Some(people) = prompt(&mut input, "People")? else {
            break;
        };
        match submit_answers(app, title, description, people) {
            Ok(()) => display_screen(app),
            Err(e) => display_alert(&e, None),
        }
    }
    println!();
    Ok(())
}

fn batch(app: &mut App, file: &Path, keep_going: bool) -> Result<()> {
    let submissions = loaders::load_file(file)?;
    let report = app.submit_all(&submissions);
    for (line, e) in &report.rejected {
        display_alert(e, Some(*line));
    }
    info!(
        accepted = report.accepted,
        rejected = report.rejected.len(),
        "batch processed"
    );
    display_screen(app);
    display_batch_summary(report.accepted, &report.rejected_lines());
    report.check(keep_going)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    init_logging(options.verbose);
    let config = load_config(options.config.as_deref())?;
    let mut app = App::new(&config);
    match options.command.unwrap_or(Command::Interactive) {
        Command::Interactive => interactive(&mut app, std::io::stdin().lock())?,
        Command::Batch { file, keep_going } => batch(&mut app, &file, keep_going)?,
        Command::Add {
            title,
            description,
            people,
        } => {
            if let Err(e) = app.submit(&title, &description, &people) {
                display_alert(&e, None);
                bail!("project was rejected");
            }
            display_screen(&app);
        }
    }
    Ok(())
}
