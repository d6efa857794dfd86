use clap::{Parser, Subcommand};
use colored::*;
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use lavendeux_syntax::config::{self, CONFIG_FILE, Config};
use lavendeux_syntax::exit_codes::exit;
use lavendeux_syntax::languages::Language;
use lavendeux_syntax::registry::FormatterRegistry;
use lavendeux_syntax::rule::Pattern;
use lavendeux_syntax::sample::SampleCatalog;
use lavendeux_syntax::style::{StyleMode, Styler};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Ignore any configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    no_config: bool,

    /// Span style, overriding the configuration file
    #[arg(long, global = true, value_enum)]
    style: Option<StyleMode>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight a code file (or stdin) as HTML
    Format {
        /// File to format; reads stdin when absent or `-`
        file: Option<PathBuf>,

        /// Language tag of the input
        #[arg(short, long, default_value = "lavendeux")]
        language: String,

        /// Print both buffers after every rule to stderr
        #[arg(long)]
        trace: bool,
    },
    /// Render a sample document to HTML
    Samples {
        /// Sample document; the bundled one when absent
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the example block of a sample document
    Example {
        /// Sample document; the bundled one when absent
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List the supported language tags
    Languages,
    /// Create a default configuration file
    Init {
        /// Where to write the file
        #[arg(long, default_value = CONFIG_FILE)]
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match run(&cli) {
        Ok(()) => exit::success(),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            exit::tool_error();
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if let Commands::Init { path } = &cli.command {
        config::create_default_config(path)?;
        println!("Created default configuration file: {}", path.display());
        return Ok(());
    }

    let styler = load_styler(cli)?;
    let registry = FormatterRegistry::new(&styler)?;

    match &cli.command {
        Commands::Format { file, language, trace } => format_code(&registry, file.as_deref(), language, *trace),
        Commands::Samples { file, output } => {
            let html = load_catalog(file.as_deref())?.to_html(&registry);
            match output {
                Some(path) => fs::write(path, html)?,
                None => println!("{html}"),
            }
            Ok(())
        }
        Commands::Example { file } => {
            println!("{}", load_catalog(file.as_deref())?.example());
            Ok(())
        }
        Commands::Languages => {
            for name in registry.languages() {
                if name == Language::DEFAULT.name() {
                    println!("{name} {}", "(default)".dimmed());
                } else {
                    println!("{name}");
                }
            }
            Ok(())
        }
        Commands::Init { .. } => Ok(()),
    }
}

fn load_styler(cli: &Cli) -> Result<Styler, Box<dyn Error>> {
    let mut config = if cli.no_config {
        Config::default()
    } else if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        match Config::discover(&std::env::current_dir()?)? {
            Some((path, config)) => {
                log::debug!("Using config file {}", path.display());
                config
            }
            None => Config::default(),
        }
    };

    if let Some(style) = cli.style {
        config.global.style = style;
    }
    Ok(config.styler())
}

fn load_catalog(file: Option<&Path>) -> Result<SampleCatalog, Box<dyn Error>> {
    let catalog = match file {
        Some(path) => SampleCatalog::from_path(path)?,
        None => SampleCatalog::bundled()?,
    };
    Ok(catalog)
}

fn format_code(
    registry: &FormatterRegistry,
    file: Option<&Path>,
    language: &str,
    trace: bool,
) -> Result<(), Box<dyn Error>> {
    let input = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if !registry.has(language) {
        log::warn!("Unknown language '{language}', formatting as {}", Language::DEFAULT);
    }
    let formatter = registry.get(language);

    if trace {
        let stderr = io::stderr();
        let mut err = stderr.lock();
        let states = formatter.trace(&input);
        for (i, (rule, state)) in formatter.rules().iter().zip(states.iter().skip(1)).enumerate() {
            let pattern = match rule.pattern() {
                Pattern::Regex(regex) => regex.as_str().to_string(),
                Pattern::WholeString => "<whole string>".to_string(),
            };
            writeln!(err, "{} {}", format!("Rule {}:", i + 1).cyan().bold(), pattern)?;
            writeln!(err, "  {} {:?}", "result:   ".dimmed(), state.result)?;
            writeln!(err, "  {} {:?}", "remainder:".dimmed(), state.remainder)?;
        }
    }

    println!("{}", formatter.format(&input));
    Ok(())
}
