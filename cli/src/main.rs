mod ui;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use flexi_logger::Logger;
use log::info;
use pip_core::{resolve_data_file, FileTaskStore, Response, Session, TaskStore};

use crate::ui::Ui;

#[derive(Parser)]
#[command(name = "pip")]
#[command(about = "A small task list you talk to", long_about = None)]
struct Cli {
    /// Task file to load and save (default: ~/.pip/pip.txt)
    #[arg(short, long, env = "PIP_DATA_FILE")]
    file: Option<PathBuf>,

    /// Log level for diagnostics on stderr; RUST_LOG overrides it
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Run a single command and exit, e.g. `pip todo read book`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = Logger::try_with_env_or_str(&cli.log_level)?
        .log_to_stderr()
        .start()?;

    let path = resolve_data_file(cli.file);
    info!("using data file {}", path.display());
    let mut session = Session::open(FileTaskStore::new(path));

    let stdout = io::stdout();
    let mut ui = Ui::new(stdout.lock());

    if cli.command.is_empty() {
        return run_interactive(&mut session, &mut ui, io::stdin().lock());
    }

    let response = run_once(&mut session, &mut ui, &cli.command)?;
    if response.is_error {
        // exit() skips destructors.
        drop(ui);
        drop(logger);
        std::process::exit(1);
    }
    Ok(())
}

fn run_once<S, W>(session: &mut Session<S>, ui: &mut Ui<W>, words: &[String]) -> Result<Response>
where
    S: TaskStore,
    W: Write,
{
    for warning in session.startup_warnings() {
        ui.show_error(warning)?;
    }
    let response = session.respond(&words.join(" "));
    ui.show_response(&response)?;
    Ok(response)
}

fn run_interactive<S, W, R>(session: &mut Session<S>, ui: &mut Ui<W>, input: R) -> Result<()>
where
    S: TaskStore,
    W: Write,
    R: BufRead,
{
    ui.show_line()?;
    ui.show(&session.greeting())?;
    ui.show_line()?;

    for line in input.lines() {
        let line = line?;
        ui.show_line()?;
        let response = session.respond(&line);
        ui.show_response(&response)?;
        ui.show_line()?;
        if response.is_exit {
            break;
        }
    }
    Ok(())
}
