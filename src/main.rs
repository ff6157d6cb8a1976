// BubbleTTY: Step-by-Step Bubble Sort in the Terminal

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use bubbletty::presenter::Report;
use bubbletty::session::{Session, SessionConfig};
use bubbletty::stepper::constants::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_INPUT, DEFAULT_PLAY_INTERVAL_MS,
};
use bubbletty::ui::{App, AppConfig};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Env, Target};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Watch bubble sort compare and swap, one step at a time
#[derive(Debug, Parser)]
#[command(version, about, allow_negative_numbers = true)]
struct CLIArgs {
    /// Numbers to sort, comma and/or space separated
    values: Vec<String>,

    /// Print the result to stdout instead of starting the terminal UI
    #[arg(long)]
    batch: bool,

    /// In batch mode, take at most this many single steps instead of running to the end
    #[arg(long, value_name = "N")]
    steps: Option<usize>,

    /// Fixed ceiling for run to end, instead of n*(n-1)/2 + n
    #[arg(long, value_name = "N")]
    max_steps: Option<usize>,

    /// Delay between automatic steps in play mode
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_PLAY_INTERVAL_MS)]
    play_interval_ms: u64,

    /// Memory budget for the step-back history, in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// Write diagnostic logging (RUST_LOG) to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl CLIArgs {
    fn input_text(&self) -> String {
        if self.values.is_empty() {
            DEFAULT_INPUT.to_string()
        } else {
            self.values.join(" ")
        }
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_steps: self.max_steps,
            history_limit: self.history_limit,
        }
    }
}

fn init_logging(args: &CLIArgs) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match &args.log_file {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("Failed to create log file({}).", path.display())
            })?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        // stderr would draw over the alternate screen
        None if !args.batch => {
            builder.filter_level(log::LevelFilter::Off);
        }
        None => {}
    }
    builder.init();
    Ok(())
}

fn print_report(report: &Report) {
    println!("{}", report.current_view());
    println!();
    println!("{}", report.stats_line());
    println!();
    println!("{}", report.log_text());
}

fn run_batch(args: &CLIArgs) -> Result<ExitCode> {
    let mut session = Session::new(args.session_config());
    if let Err(e) = session.start(&args.input_text()) {
        eprintln!("Error: {}", e);
        return Ok(ExitCode::FAILURE);
    }

    let result = match args.steps {
        Some(count) => session.advance(count),
        None => session.run_to_end(),
    };

    if let Some(report) = session.report() {
        print_report(&report);
    }

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_tui(args: &CLIArgs) -> Result<ExitCode> {
    let mut session = Session::new(args.session_config());
    let input = args.input_text();
    // Invalid input is shown in the UI once the user presses r
    if session.start(&input).is_ok() {
        info!("started with input {:?}", input);
    }

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode.")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen.")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal.")?;

    // Create and run app
    let config = AppConfig {
        play_interval: Duration::from_millis(args.play_interval_ms),
    };
    let mut app = App::new(session, input, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Terminal UI failed.")?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = CLIArgs::parse();
    init_logging(&args)?;

    if args.batch {
        run_batch(&args)
    } else {
        run_tui(&args)
    }
}
