//! Autodoc CLI - event automation and response caching

use autodoc::automation::Dispatcher;
use autodoc::logger::EventLogger;
use autodoc::poller::{shutdown_channel, Poller};
use autodoc::provider::create_generator;
use autodoc::recovery::HttpRemedySource;
use autodoc::{Config, EventApi, ResponseCache, Result, SignalChannel};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "autodoc")]
#[command(about = "Autodoc - event automation and resilient response caching")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the background poller until interrupted
    Run {
        /// Override the poll interval in seconds
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Generate text for a query, resolved through the response cache
    Generate {
        /// The query to generate a response for
        query: String,

        /// Generator backend (gemini, mock)
        #[arg(short, long, default_value = "gemini")]
        generator: String,

        /// Task type used in the cache fingerprint and model criteria
        #[arg(short, long, default_value = "content_generation")]
        task_type: String,
    },

    /// Trigger an automation event
    Trigger {
        /// Event type (modification, creation, deletion)
        event_type: String,

        /// System type (AutoDocGenerator, LoggingSystem)
        system_type: String,

        /// Language (Python, Java, JavaScript)
        language: String,
    },

    /// Write a token into the signal channel
    Signal {
        /// The message to place in the slot
        message: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    let result = match cli.command {
        Commands::Run { interval } => run_poller(&config, interval).await,
        Commands::Generate {
            query,
            generator,
            task_type,
        } => generate(&config, &query, &generator, &task_type).await,
        Commands::Trigger {
            event_type,
            system_type,
            language,
        } => trigger(&config, &event_type, &system_type, &language).await,
        Commands::Signal { message } => signal(&config, &message),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn event_api(config: &Config) -> EventApi {
    let remedy = HttpRemedySource::new(config.search_url.clone(), config.request_timeout());
    let logger = EventLogger::new(&config.log_path, Box::new(remedy));
    EventApi::new(Dispatcher::new(), logger)
}

async fn run_poller(config: &Config, interval: Option<u64>) -> Result<()> {
    let interval = interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.poll_interval());

    let signal = SignalChannel::new(&config.signal_path);
    let poller = Poller::new(event_api(config), signal, interval);
    let (tx, rx) = shutdown_channel();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(true);
        }
    });

    println!("{}", "Poller running (Ctrl-C to stop)".green());
    poller.run(rx).await;
    Ok(())
}

async fn generate(config: &Config, query: &str, generator: &str, task_type: &str) -> Result<()> {
    autodoc::validate_input(query)?;

    let generator = create_generator(generator, config)?;
    let cache = ResponseCache::new(config.cache_capacity);

    let response = cache
        .resolve(query, task_type, || async {
            generator.generate(query).await
        })
        .await?;

    println!("{}", response);
    Ok(())
}

async fn trigger(config: &Config, event_type: &str, system_type: &str, language: &str) -> Result<()> {
    event_api(config)
        .trigger_event(event_type, system_type, language)
        .await?;
    println!("{} event logged to {}", "OK".green().bold(), config.log_path);
    Ok(())
}

fn signal(config: &Config, message: &str) -> Result<()> {
    let channel = SignalChannel::new(&config.signal_path);
    channel.write(message)?;
    println!("{} signal written to {}", "OK".green().bold(), config.signal_path);
    Ok(())
}
