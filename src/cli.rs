//! Command-line interface implementation for Boiling.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, Subcommand};

/// Command-line arguments structure for Boiling.
#[derive(Parser, Debug)]
#[command(author, version, about = "Boiling: project scaffolding driven by a user-level configuration", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project in the current directory
    New {
        /// Project name substituted into the license template instead of
        /// the configured one
        #[arg(long)]
        name: Option<String>,

        /// Target programming language (c, clang, c++, cpp, py)
        #[arg(short, long)]
        lang: String,
    },

    /// Inspect the configuration of the application
    Config {
        /// Verify the syntactic and lexical correctness of the configuration
        /// file. Repeating the flag is a no-op.
        #[arg(short, long, action = ArgAction::Count)]
        verify: u8,

        /// Print the config file path. Repeating the flag is a no-op.
        #[arg(short = 'w', long = "where", action = ArgAction::Count)]
        where_: u8,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the full help text if no subcommand is given
/// * With status code 1 and a descriptive message for any other argument
///   error; requested help/version output still exits 0
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingSubcommand
                || e.kind() == ErrorKind::MissingRequiredArgument
            {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            }
            if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion {
                e.exit();
            }
            let _ = e.print();
            std::process::exit(1);
        }
    }
}
