//! protoc plugin protocol.
//!
//! protoc writes a serialized `CodeGeneratorRequest` to the plugin's stdin and
//! expects a `CodeGeneratorResponse` on stdout. Problems with the schema or
//! the parameter string are reported through the response's `error` field;
//! only an unreadable request is a hard failure.

use crate::emit::{GeneratedFile, generate};
use crate::model::FileModel;
use prost::Message;
use prost_types::compiler::code_generator_response::File;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use rngrpc_core::{GenerateError, GenerateResult, GeneratorOptions};
use tracing::{debug, error};

/// `CodeGeneratorResponse.Feature.FEATURE_PROTO3_OPTIONAL`
///
/// Optional scalars have the same accessors as plain proto3 fields, so
/// nothing changes for the generated bridge.
pub const FEATURE_PROTO3_OPTIONAL: u64 = 1;

/// Decode a serialized request
pub fn decode_request(bytes: &[u8]) -> GenerateResult<CodeGeneratorRequest> {
    CodeGeneratorRequest::decode(bytes).map_err(|e| GenerateError::RequestDecode(e.to_string()))
}

/// Serialize a response
pub fn encode_response(response: &CodeGeneratorResponse) -> Vec<u8> {
    response.encode_to_vec()
}

/// Options from the request's parameter string
pub fn request_options(request: &CodeGeneratorRequest) -> GenerateResult<GeneratorOptions> {
    GeneratorOptions::from_parameter(request.parameter())
}

/// Generate the response for `request` with already parsed options
pub fn respond(
    request: &CodeGeneratorRequest,
    options: &GeneratorOptions,
) -> GenerateResult<CodeGeneratorResponse> {
    debug!(
        files = request.proto_file.len(),
        to_generate = request.file_to_generate.len(),
        "handling request"
    );

    let files = request
        .proto_file
        .iter()
        .map(FileModel::from_descriptor)
        .collect::<GenerateResult<Vec<_>>>()?;

    let generated = generate(&files, &request.file_to_generate, options)?;

    Ok(CodeGeneratorResponse {
        supported_features: Some(FEATURE_PROTO3_OPTIONAL),
        file: generated.into_iter().map(response_file).collect(),
        ..Default::default()
    })
}

/// Response reporting `err` to protoc
pub fn error_response(err: &GenerateError) -> CodeGeneratorResponse {
    error!(%err, "generation failed");
    CodeGeneratorResponse {
        error: Some(err.to_string()),
        supported_features: Some(FEATURE_PROTO3_OPTIONAL),
        ..Default::default()
    }
}

/// Handle a decoded request
///
/// Never fails: errors end up in the response.
pub fn handle_request(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    request_options(request)
        .and_then(|options| respond(request, &options))
        .unwrap_or_else(|err| error_response(&err))
}

/// Handle a serialized request, returning the serialized response
///
/// Fails only when `bytes` is not a request.
pub fn handle_request_bytes(bytes: &[u8]) -> GenerateResult<Vec<u8>> {
    let request = decode_request(bytes)?;
    Ok(encode_response(&handle_request(&request)))
}

fn response_file(file: GeneratedFile) -> File {
    File {
        name: Some(file.name),
        content: Some(file.content),
        ..Default::default()
    }
}

#[cfg(test)]
#[path = "protocol/protocol_tests.rs"]
mod protocol_tests;
