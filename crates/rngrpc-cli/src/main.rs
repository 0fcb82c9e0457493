//! protoc-gen-rngrpc - React Native gRPC bridge generator
//!
//! Modes:
//! - no arguments: protoc plugin, `CodeGeneratorRequest` on stdin,
//!   `CodeGeneratorResponse` on stdout
//! - `protoc-gen-rngrpc generate` - generate from a `FileDescriptorSet` file
//!
//! Logs go to stderr. `RNGRPC_LOG` sets the level and overrides `log_level`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod generate;
mod logging;
mod plugin;

#[derive(Parser, Debug)]
#[command(name = "protoc-gen-rngrpc")]
#[command(author, version, about = "React Native gRPC bridge generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate bridge modules from a descriptor set
    Generate {
        /// FileDescriptorSet written by `protoc --include_imports -o`
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Output directory for generated Java sources
        #[arg(short, long)]
        output: PathBuf,

        /// Path to an rngrpc.toml with generator options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Generator parameter string (k=v,k2=v2), overrides the config file
        #[arg(short, long)]
        parameter: Option<String>,

        /// Proto file to generate (repeatable, default: every file in the set)
        #[arg(short, long = "file")]
        files: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_level = logging::env_level(std::env::var(logging::LOG_ENV).ok().as_deref());
    logging::init_logging(logging::initial_level(env_level));

    match cli.command {
        None => plugin::run(env_level)?,
        Some(Commands::Generate {
            descriptor_set,
            output,
            config,
            parameter,
            files,
        }) => {
            let args = generate::GenerateArgs {
                descriptor_set,
                output,
                config,
                parameter,
                files,
            };
            generate::run(&args, env_level)?;
        }
    }

    Ok(())
}
