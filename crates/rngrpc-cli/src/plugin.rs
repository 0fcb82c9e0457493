//! protoc plugin mode: request on stdin, response on stdout

use crate::logging;
use anyhow::Context;
use prost_types::compiler::CodeGeneratorResponse;
use rngrpc_codegen::protocol;
use rngrpc_core::{GenerateResult, LogLevel};
use std::io::{self, Read, Write};

/// Read one request from stdin and answer on stdout
pub fn run(env_level: Option<LogLevel>) -> anyhow::Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("Failed to read request from stdin")?;

    let output = respond(&input, env_level)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&output)
        .context("Failed to write response to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Serialized response for a serialized request
///
/// Fatal errors (see [`rngrpc_core::GenerateError::is_fatal`]) fail the
/// process. Every other error is reported to protoc inside the response.
pub fn respond(input: &[u8], env_level: Option<LogLevel>) -> anyhow::Result<Vec<u8>> {
    let response = match build_response(input, env_level) {
        Ok(response) => response,
        Err(err) if err.is_fatal() => {
            return Err(err).context("Failed to handle CodeGeneratorRequest");
        }
        Err(err) => protocol::error_response(&err),
    };

    Ok(protocol::encode_response(&response))
}

fn build_response(
    input: &[u8],
    env_level: Option<LogLevel>,
) -> GenerateResult<CodeGeneratorResponse> {
    let request = protocol::decode_request(input)?;
    let options = protocol::request_options(&request)?;
    logging::set_level(logging::effective_level(env_level, options.log_level));
    protocol::respond(&request, &options)
}
