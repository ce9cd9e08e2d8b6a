use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vendmach::application::machine::VendingMachine;
use vendmach::domain::ports::{ProductCatalog, ProductCatalogBox};
use vendmach::infrastructure::in_memory::InMemoryCatalog;
use vendmach::infrastructure::json_catalog::JsonCatalog;
use vendmach::interfaces::action::Observation;
use vendmach::interfaces::csv::action_reader::ActionReader;
use vendmach::interfaces::csv::observation_writer::ObservationWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input actions CSV file
    input: PathBuf,

    /// JSON product catalog (optional). Defaults to cola, chips and candy.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog: ProductCatalogBox = match cli.catalog {
        Some(path) => Box::new(JsonCatalog::from_path(path).into_diagnostic()?),
        None => Box::new(InMemoryCatalog::default()),
    };
    let products = ProductCatalog::products(catalog.as_ref());
    info!(products = products.len(), "catalog loaded");
    let mut machine = VendingMachine::with_catalog(catalog);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ActionReader::new(file);
    let stdout = io::stdout();
    let mut writer = ObservationWriter::new(stdout.lock());

    for action_result in reader.actions() {
        match action_result {
            Ok(action) => match action.apply(&mut machine) {
                Ok(Some(observation)) => writer.write(&observation).into_diagnostic()?,
                Ok(None) => {}
                Err(e) => eprintln!("Error processing action: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading action: {}", e);
            }
        }
    }

    let balance = VendingMachine::format_value(machine.balance());
    writer
        .write(&Observation::new("balance", balance))
        .into_diagnostic()?;
    writer.flush().into_diagnostic()?;

    Ok(())
}
