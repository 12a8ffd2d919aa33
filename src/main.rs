//! Moana Index - command-line entrypoint.
//!
//! Builds a suffix-trie index over a line-oriented corpus file and answers
//! containment, counting, completion and statistics queries against it.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use moana_index_lib::config::{ConfigLoader, LogConfig, MoanaConfig, ENV_PREFIX};
use moana_index_lib::corpus::build_index;
use moana_index_lib::data_structures::LauTrie;
use moana_index_lib::error::{
    report, set_error_reporter, ErrorContext, MoanaError, MoanaResult, TracingErrorReporter,
};

/// Command line arguments for Moana Index.
#[derive(Parser, Debug)]
#[clap(name = "moana_index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build the index and log its size
    Build {
        /// Corpus file, one string per line
        corpus: PathBuf,
    },

    /// Print character statistics and the longest repeat
    Stats {
        /// Corpus file, one string per line
        corpus: PathBuf,

        /// Print the summary as JSON
        #[clap(long)]
        json: bool,
    },

    /// Test whether a query occurs in the corpus
    Contains {
        /// Corpus file, one string per line
        corpus: PathBuf,

        /// Text to look for
        query: String,

        /// Match whole lines only
        #[clap(long)]
        exact: bool,
    },

    /// Count occurrences of a substring
    Count {
        /// Corpus file, one string per line
        corpus: PathBuf,

        /// Substring to count
        query: String,
    },

    /// List completions of a query
    Complete {
        /// Corpus file, one string per line
        corpus: PathBuf,

        /// Text to complete
        #[clap(default_value = "")]
        query: String,

        /// Complete line beginnings only
        #[clap(long)]
        exact: bool,
    },

    /// Print the longest repeated substring
    Repeat {
        /// Corpus file, one string per line
        corpus: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. `RUST_LOG` wins over the configured level.
fn init_logging(log: &LogConfig) -> MoanaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    installed
        .map_err(|e| MoanaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_index(corpus: &Path, config: &MoanaConfig) -> MoanaResult<LauTrie> {
    let trie = build_index(corpus, config)?;
    info!(
        corpus = %corpus.display(),
        strings = trie.len(),
        nodes = trie.node_count(),
        initiator = ?trie.config().initiator,
        delimiter = ?trie.config().delimiter,
        "Index built"
    );
    Ok(trie)
}

fn show<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn run(command: Command, config: &MoanaConfig) -> MoanaResult<()> {
    match command {
        Command::Build { corpus } => {
            load_index(&corpus, config)?;
        }
        Command::Stats { corpus, json } => {
            let summary = load_index(&corpus, config)?.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("strings:              {}", summary.strings);
                println!("nodes:                {}", summary.nodes);
                println!("most frequent:        {}", show(summary.most_frequent));
                println!("least frequent:       {}", show(summary.least_frequent));
                println!("most frequent begin:  {}", show(summary.most_frequent_begin));
                println!("least frequent begin: {}", show(summary.least_frequent_begin));
                println!("most frequent end:    {}", show(summary.most_frequent_end));
                println!("least frequent end:   {}", show(summary.least_frequent_end));
                println!("longest repeat:       {}", show(summary.longest_repeat));
            }
        }
        Command::Contains {
            corpus,
            query,
            exact,
        } => {
            let trie = load_index(&corpus, config)?;
            let found = if exact {
                trie.contains_string(&query)
            } else {
                trie.contains_substring(&query)
            };
            println!("{found}");
        }
        Command::Count { corpus, query } => {
            let trie = load_index(&corpus, config)?;
            println!("{}", trie.count_substring(&query)?);
        }
        Command::Complete {
            corpus,
            query,
            exact,
        } => {
            let trie = load_index(&corpus, config)?;
            let completions = if exact {
                trie.complete_string(&query)?
            } else {
                trie.complete_substring(&query)?
            };
            for completion in completions {
                println!("{completion}");
            }
        }
        Command::Repeat { corpus } => {
            let trie = load_index(&corpus, config)?;
            println!("{}", trie.longest_repeat()?);
        }
        Command::Validate => {
            // Reaching this point means the configuration already loaded cleanly.
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&MoanaConfig::default())
                .map_err(|e| MoanaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load() {
        Ok(config) => config,
        Err(e) => {
            // Logging still needs a level, fall back to the defaults.
            if let Err(log_error) = init_logging(&LogConfig::default()) {
                eprintln!("{log_error}");
            }
            report(&ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }

    if let Err(e) = run(args.command, &config) {
        report(&ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}
