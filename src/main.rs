use cash_drawer::application::register::Register;
use cash_drawer::domain::drawer::Drawer;
use cash_drawer::domain::money::Money;
use cash_drawer::interfaces::csv::drawer_reader::DrawerReader;
use cash_drawer::interfaces::csv::tender_reader::TenderReader;
use cash_drawer::interfaces::receipt_writer::ReceiptWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input tenders CSV file (`cash` column, optional `price` column)
    input: PathBuf,

    /// Item price in major units
    #[arg(long, default_value = "3.55")]
    price: Decimal,

    /// Opening drawer CSV (`denomination,amount`). Uses the built-in drawer if omitted.
    #[arg(long)]
    drawer: Option<PathBuf>,

    /// Emit one JSON object per tender instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let price = Money::from_decimal(cli.price).into_diagnostic()?;
    let register = Register::new(price).into_diagnostic()?;

    let mut drawer = match cli.drawer {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            DrawerReader::new(file).into_drawer().into_diagnostic()?
        }
        None => Drawer::default(),
    };

    let stdout = io::stdout();
    let mut writer = if cli.json {
        ReceiptWriter::json(stdout.lock())
    } else {
        ReceiptWriter::new(stdout.lock())
    };

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = TenderReader::new(file);
    for tender_result in reader.tenders() {
        let tender = match tender_result {
            Ok(tender) => tender,
            Err(e) => {
                eprintln!("Error reading tender: {}", e);
                continue;
            }
        };

        let outcome = match tender.price {
            Some(price) => Money::from_decimal(price)
                .and_then(Register::new)
                .and_then(|r| r.evaluate_input(&mut drawer, &tender.cash)),
            None => register.evaluate_input(&mut drawer, &tender.cash),
        };

        match outcome {
            Ok(outcome) => writer.write_outcome(&outcome).into_diagnostic()?,
            Err(e) => eprintln!("Error processing tender: {}", e),
        }
    }

    if !cli.json {
        writer.write_drawer(&drawer).into_diagnostic()?;
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable; `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
