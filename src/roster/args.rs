use clap::{Args, Parser, Subcommand, ValueEnum};
use roster::validation::Field;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CheckField {
    Name,
    Email,
    Address,
    Phone,
    Gender,
    Hobbies,
    Designation,
}

impl From<CheckField> for Field {
    fn from(field: CheckField) -> Self {
        match field {
            CheckField::Name => Field::Name,
            CheckField::Email => Field::Email,
            CheckField::Address => Field::Address,
            CheckField::Phone => Field::Phone,
            CheckField::Gender => Field::Gender,
            CheckField::Hobbies => Field::Hobbies,
            CheckField::Designation => Field::Designation,
        }
    }
}

/// Returns the version string, with git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("ROSTER_GIT_HASH");
    const COMMIT_DATE: &str = env!("ROSTER_COMMIT_DATE");
    const IS_RELEASE: &str = env!("ROSTER_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roster", version = get_version())]
#[command(about = "Keep a validated employee roster for the current session", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Session to operate on (defaults to the configured session)
    #[arg(short, long, global = true, env = "ROSTER_SESSION")]
    pub session: Option<String>,

    /// Directory holding config and session data
    #[arg(long, global = true, env = "ROSTER_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an employee
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List employees
    #[command(alias = "ls")]
    List,

    /// Show one employee
    #[command(alias = "v")]
    Show { id: u64 },

    /// Edit an employee; fields not given keep their current values
    #[command(alias = "e")]
    Edit {
        id: u64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete an employee
    #[command(alias = "rm")]
    Delete {
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate a single field value without saving anything
    Check {
        #[arg(value_enum)]
        field: CheckField,

        /// Value(s) to check; hobbies take several
        values: Vec<String>,
    },

    /// Forget every employee in the session and restart ids at 1
    ResetSession {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Male, Female, Other (or M, F, O)
    #[arg(long)]
    pub gender: Option<String>,

    /// Repeat for several hobbies
    #[arg(long = "hobby")]
    pub hobbies: Vec<String>,

    #[arg(long)]
    pub designation: Option<String>,
}
