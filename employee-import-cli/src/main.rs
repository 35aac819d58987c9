use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;

use employee_import::employee::{DateFormat, SITES};
use employee_import::error::ImportError;
use employee_import::generator::{generate_all_employees, FakerSource};
use employee_import::request::{
    GenerationRequest, OutputFormat, WriteOptions, DEFAULT_YEARS_BACK, MAX_PER_FILE,
};
use employee_import::writer::write_files;

/// Generate dummy employee spreadsheets for HiBob bulk import.
#[derive(Parser)]
#[clap(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// Company identifier embedded in every generated email address
    pub(crate) company_id: String,
    /// Number of employees to generate
    pub(crate) count: i64,
    /// Start date format: DD/MM/YYYY (default) or MM/DD/YYYY, case-insensitive
    #[clap(long)]
    pub(crate) date_format: Option<String>,
    /// Directory the files are written to
    #[clap(long, default_value = ".")]
    pub(crate) output_dir: PathBuf,
    /// Maximum number of employees per file
    #[clap(long, default_value_t = MAX_PER_FILE)]
    pub(crate) max_per_file: usize,
    /// How many years back start dates may reach
    #[clap(long, default_value_t = DEFAULT_YEARS_BACK)]
    pub(crate) years_back: u32,
    /// Output file format: xlsx or csv
    #[clap(long, default_value = "xlsx")]
    pub(crate) format: String,
    /// Seed for repeatable output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
    /// Extra positional arguments are accepted and ignored
    #[clap(hide = true)]
    pub(crate) _ignored: Vec<String>,
}

fn run(cli: Cli) -> Result<(), ImportError> {
    let date_format = match cli.date_format {
        Some(label) => label.parse()?,
        None => DateFormat::default(),
    };
    let format: OutputFormat = cli.format.parse()?;
    let request = GenerationRequest::new(cli.company_id, cli.count, date_format)?
        .with_years_back(cli.years_back)?;
    let options = WriteOptions::new(cli.output_dir, cli.max_per_file, format)?;

    println!("Sites ({}): {}", SITES.len(), SITES.join(", "));

    let mut source = match cli.seed {
        Some(seed) => FakerSource::seeded(seed),
        None => FakerSource::from_entropy(),
    };
    let today = chrono::Local::now().date_naive();
    let employees = generate_all_employees(&mut source, &request, today)?;

    for file in write_files(&employees, &options)? {
        println!("Generated: {} ({} employees)", file.file_name(), file.rows);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too and keep clap's success exit.
            if !e.use_stderr() {
                e.exit();
            }
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        if e.is_usage() {
            eprintln!("{}", e);
        } else {
            error!("Generation failed: {}", e);
        }
        process::exit(1);
    }
}
