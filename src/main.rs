use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use confscope::analyzer::AnalysisMode;
use confscope::cli::Output;
use confscope::cli::commands::{self, RunOptions};
use confscope::types::ConfscopeError;

#[derive(Parser)]
#[command(name = "confscope")]
#[command(
    version,
    about = "Map a project's configuration files and source symbols"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify known configuration files and directories
    Classify(RunArgs),

    /// Scan source files for imports, re-exports and components
    Scan(RunArgs),

    /// Classify and scan in a single pass
    Analyze(RunArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
struct RunArgs {
    #[arg(default_value = ".", help = "Directory to analyze")]
    path: PathBuf,

    #[arg(short, long, help = "Directory for the JSON report")]
    output: Option<PathBuf>,

    #[arg(long, help = "Do not print the tree")]
    no_tree: bool,

    #[arg(long, help = "Do not write the JSON report")]
    no_report: bool,

    #[arg(long, help = "Maximum walk depth below the root")]
    max_depth: Option<usize>,

    #[arg(long, help = "Include hidden files and directories")]
    hidden: bool,

    #[arg(long, help = "Honor .gitignore and .ignore files")]
    gitignore: bool,

    #[arg(long, help = "Write the JSON report without indentation")]
    compact: bool,
}

impl RunArgs {
    fn into_options(self, mode: AnalysisMode, quiet: bool) -> RunOptions {
        RunOptions {
            path: self.path,
            mode,
            output: self.output,
            no_tree: self.no_tree,
            no_report: self.no_report,
            max_depth: self.max_depth,
            hidden: self.hidden,
            gitignore: self.gitignore,
            compact: self.compact,
            quiet,
        }
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mconfscope encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&format!("Error: {}", e));
            // Bad input paths get their own code
            match e.downcast_ref::<ConfscopeError>() {
                Some(err) if err.is_input_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Classify(args) => {
            commands::run(args.into_options(AnalysisMode::Classify, cli.quiet))?;
        }
        Commands::Scan(args) => {
            commands::run(args.into_options(AnalysisMode::Scan, cli.quiet))?;
        }
        Commands::Analyze(args) => {
            commands::run(args.into_options(AnalysisMode::Full, cli.quiet))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                commands::config::show(&cwd, global, &format)?;
            }
            ConfigAction::Path => {
                commands::config::path(&cwd)?;
            }
            ConfigAction::Init { global, force } => {
                commands::config::init(&cwd, global, force)?;
            }
        },
    }

    Ok(())
}
