//! Offline generation from a descriptor set
//!
//! `protoc --include_imports -o schema.pb greeter.proto` produces a
//! `FileDescriptorSet` that can be fed here without running protoc as a
//! plugin host.

use crate::logging;
use anyhow::Context;
use prost::Message;
use prost_types::FileDescriptorSet;
use rngrpc_codegen::emit::write_files;
use rngrpc_codegen::{FileModel, GeneratedFile, generate};
use rngrpc_core::{GeneratorOptions, LogLevel};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments of the `generate` subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    pub descriptor_set: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub parameter: Option<String>,
    pub files: Vec<String>,
}

pub fn run(args: &GenerateArgs, env_level: Option<LogLevel>) -> anyhow::Result<()> {
    let options = load_options(args.config.as_deref(), args.parameter.as_deref())?;
    logging::set_level(logging::effective_level(env_level, options.log_level));

    let files = read_descriptor_set(&args.descriptor_set)?;
    let to_generate = if args.files.is_empty() {
        files.iter().map(|f| f.name.clone()).collect()
    } else {
        args.files.clone()
    };

    let generated = generate(&files, &to_generate, &options).context("Generation failed")?;
    write_output(&generated, &args.output)?;

    println!(
        "Generated {} file(s) in {}",
        generated.len(),
        args.output.display()
    );
    Ok(())
}

/// Options from an optional TOML file, overridden by an optional parameter
pub fn load_options(
    config: Option<&Path>,
    parameter: Option<&str>,
) -> anyhow::Result<GeneratorOptions> {
    let options = match config {
        Some(path) => GeneratorOptions::from_toml_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GeneratorOptions::default(),
    };

    match parameter {
        Some(parameter) => options
            .with_parameter(parameter)
            .with_context(|| format!("Invalid parameter: {parameter}")),
        None => Ok(options),
    }
}

/// Decode a `FileDescriptorSet` into file models
pub fn read_descriptor_set(path: &Path) -> anyhow::Result<Vec<FileModel>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read descriptor set: {}", path.display()))?;
    let set = FileDescriptorSet::decode(bytes.as_slice())
        .with_context(|| format!("Not a FileDescriptorSet: {}", path.display()))?;

    let files = set
        .file
        .iter()
        .map(FileModel::from_descriptor)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid descriptor in {}", path.display()))?;

    info!(files = files.len(), path = %path.display(), "read descriptor set");
    Ok(files)
}

fn write_output(generated: &[GeneratedFile], output: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    write_files(generated, output)
        .with_context(|| format!("Failed to write generated files to {}", output.display()))
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
