use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vocab::application::{init, AddOutcome, ConfigService, EntryStore, JournalSession};
use vocab::cli::{format_grouped_view, Cli, Commands};
use vocab::domain::resolve_date;
use vocab::error::VocabError;
use vocab::infrastructure::{Config, FileSlot, FileSystemRepository, JournalRepository};

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("VOCAB_LOG").unwrap_or_else(|_| EnvFilter::new("vocab=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), VocabError> {
    match cli.command {
        Commands::Init { path } => {
            init::init(&path)?;
            println!("Initialized vocab journal at {}", path.display());
            Ok(())
        }
        Commands::Add {
            word,
            meaning,
            date,
        } => {
            let date = resolve_date(&date, today())?;
            let (_, mut store) = open_store()?;
            let mut session = JournalSession::new(&mut store, date);

            match session.submit_entry(&word, &meaning, date)? {
                AddOutcome::Added => {
                    println!("Saved '{}' on {}", word, date.format("%Y-%m-%d"));
                    Ok(())
                }
                AddOutcome::Rejected(field) => Err(VocabError::Validation(field.to_string())),
            }
        }
        Commands::Show { date, all } => {
            let date = resolve_date(&date, today())?;
            let (config, mut store) = open_store()?;
            let mut session = JournalSession::new(&mut store, date);
            session.set_show_all(all);

            let output = format_grouped_view(&session.grouped_view(), &config.date_format);
            println!("{}", output.trim_end());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("slot = {}", config.slot);
                println!(
                    "seed = {}",
                    config
                        .seed
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                );
                println!("date_format = {}", config.date_format);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: vocab config [--list | <key> [<value>]]");
                println!("Valid keys: {}", vocab::application::manage_config::CONFIG_KEYS);
                Ok(())
            }
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Discover the journal and load its entries, warning when the slot had to be replaced by the seed
fn open_store() -> Result<(Config, EntryStore<FileSlot>), VocabError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let seed = config.load_seed(repo.root())?;

    let mut store = EntryStore::initialize(repo.slot(&config), seed);
    if let Some(warning) = store.take_load_warning() {
        eprintln!("Warning: {}", warning.display_with_suggestions());
    }

    Ok((config, store))
}
