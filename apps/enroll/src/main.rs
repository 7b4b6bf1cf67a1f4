use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use enrollment_core::{FormError, SUBMIT_CONFIRMATION};
use tracing_subscriber::EnvFilter;

mod draft;
mod lookup;
mod report;

use draft::Draft;

#[derive(Parser, Debug)]
#[command(about = "Prepare collaborator enrollment requests")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show field errors and whether the draft can be submitted.
    Check {
        #[arg(long)]
        draft: PathBuf,
    },
    /// Print the request payload for a submittable draft.
    Submit {
        #[arg(long)]
        draft: PathBuf,
        /// Spreadsheet to attach as a bulk upload; replaces the draft's file.
        #[arg(long)]
        file: Option<String>,
    },
    /// Look a person up on the directory service.
    Lookup {
        #[arg(long, default_value = "http://127.0.0.1:3001")]
        server_url: String,
        identifier: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Check { draft } => {
            let form = Draft::load(&draft)?.into_form()?;
            print!("{}", report::render(&form));
        }
        Command::Submit { draft, file } => {
            let mut draft = Draft::load(&draft)?;
            if file.is_some() {
                draft.file = file;
            }
            let form = draft.into_form()?;
            match form.submit() {
                Ok(payload) => {
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                    eprintln!("{SUBMIT_CONFIRMATION}");
                }
                Err(FormError::NotSubmittable(reason)) => {
                    eprint!("{}", report::render(&form));
                    bail!("{reason}");
                }
                Err(other) => return Err(other.into()),
            }
        }
        Command::Lookup {
            server_url,
            identifier,
        } => {
            let http = reqwest::Client::new();
            match lookup::fetch_person(&http, &server_url, &identifier).await? {
                Some(person) => println!("{}", serde_json::to_string_pretty(&person)?),
                None => bail!("{}", shared::error::PERSON_NOT_FOUND),
            }
        }
    }

    Ok(())
}
