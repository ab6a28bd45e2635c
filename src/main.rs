use clap::{Parser, Subcommand};
use miette::{miette, Result};
use std::path::PathBuf;

use cedar_codegen::cli;

#[derive(Parser)]
#[command(name = "cedar-codegen")]
#[command(about = "Build-time code generators for the Cedar virtual machine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the C opcode header from the built-in instruction table
    Opcodes {
        /// Output header file
        #[arg(short, long, default_value = "include/cedar/vm/opcode.h")]
        output: PathBuf,
    },

    /// Generate the CMake source manifest from a source tree scan
    Manifest {
        /// Root directory scanned for compiled sources
        #[arg(long, default_value = "src")]
        root: PathBuf,

        /// Sub-root whose sources make up the shared library
        #[arg(long, default_value = "src/cedar")]
        lib_root: PathBuf,

        /// Output manifest file
        #[arg(short, long, default_value = "src/cedar/CMakeLists.txt")]
        output: PathBuf,
    },

    /// Print the built-in instruction table
    Inspect {
        /// Output format (json, text)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Opcodes { output } => {
            cli::opcodes::opcodes(&output).map_err(|e| miette!("{}", e))
        }
        Commands::Manifest {
            root,
            lib_root,
            output,
        } => cli::manifest::manifest(&root, &lib_root, &output).map_err(|e| miette!("{}", e)),
        Commands::Inspect { format } => cli::inspect::inspect(&format).map_err(|e| miette!("{}", e)),
    }
}
