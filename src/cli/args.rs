//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;
use crate::constants;
use crate::core::request::RequestFields;
use crate::state::Operation;

/// personctl - SOAP client for the Person management service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// SOAP server URL
    #[arg(long, env = constants::ENV_URL)]
    pub url: Option<String>,

    /// Method to call
    #[arg(long, value_enum)]
    pub method: Operation,

    /// Name of the person (required for addperson and updateperson)
    #[arg(long)]
    pub name: Option<String>,

    /// Surname of the person (required for addperson and updateperson)
    #[arg(long)]
    pub surname: Option<String>,

    /// Email of the person (required for addperson and updateperson)
    #[arg(long)]
    pub email: Option<String>,

    /// Telephone of the person (required for addperson and updateperson)
    #[arg(long)]
    pub telephone: Option<String>,

    /// ID of the person (required for getperson, updateperson and deleteperson)
    #[arg(long, allow_negative_numbers = true)]
    pub id: Option<i64>,

    /// Age of the person (required for addperson and updateperson)
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,

    /// Query for searching persons (required for searchperson)
    #[arg(long)]
    pub query: Option<String>,

    /// Path to a config file (defaults to the per-user config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File that receives JSON log lines
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the raw response body before the decoded result
    #[arg(long)]
    pub raw: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Operation-specific inputs, still unvalidated.
    #[must_use]
    pub fn request_fields(&self) -> RequestFields {
        RequestFields {
            id: self.id,
            name: self.name.clone(),
            surname: self.surname.clone(),
            age: self.age,
            email: self.email.clone(),
            telephone: self.telephone.clone(),
            query: self.query.clone(),
        }
    }

    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone(),
            timeout_secs: self.timeout,
            log_file: self.log_file.clone(),
            verbose: self.verbose,
        }
    }
}
