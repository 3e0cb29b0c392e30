use std::path::PathBuf;

use clap::Parser;
use desladder_plcopen::ProjectOptions;

mod cli;
mod logger;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "desladderc",
    about = "Generates PLCopen ladder programs from supervisors and plant automata"
)]
struct Args {
    /// Turn on verbose logging. Repeat to increase verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Sets the logging to write to a file.
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Selects the subcommand.
    #[command(subcommand)]
    action: Action,
}

#[derive(clap::Subcommand, Debug)]
enum Action {
    /// Generates the ladder project for a model file.
    Generate {
        /// Path to the JSON model file.
        model: PathBuf,

        /// Path of the PLCopen XML project to write.
        #[arg(short, long)]
        output: PathBuf,

        /// Name of the project in the document header.
        #[arg(long)]
        project_name: Option<String>,

        /// Name of the program that holds the ladder diagram.
        #[arg(long)]
        pou_name: Option<String>,
    },
    /// Prints the version number of the generator.
    Version,
}

pub fn main() -> Result<(), String> {
    let args = Args::parse();

    logger::configure(args.verbose, args.log_file)?;

    match args.action {
        Action::Generate {
            model,
            output,
            project_name,
            pou_name,
        } => {
            let defaults = ProjectOptions::default();
            let options = ProjectOptions {
                project_name: project_name.unwrap_or(defaults.project_name.clone()),
                pou_name: pou_name.unwrap_or(defaults.pou_name.clone()),
                ..defaults
            };
            cli::generate(&model, &output, &options)
        }
        Action::Version => {
            println!("desladderc version {VERSION}");
            Ok(())
        }
    }
}
