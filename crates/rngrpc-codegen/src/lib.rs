//! React Native bridge generation from protobuf descriptors.
//!
//! This crate turns the descriptors `protoc` hands to a plugin into one Java
//! source file per `.proto` file: a `ReactContextBaseJavaModule` exposing one
//! `@ReactMethod` per unary RPC, plus a static `Transformer` class per message
//! converting between `ReadableMap`/`WritableMap` and the protobuf type.
//!
//! # Architecture
//!
//! ```text
//! CodeGeneratorRequest
//!     ↓
//!  [descriptor]  FileDescriptorProto → FileModel
//!     ↓
//!  [walker]      FileModel → Scalars + Sequences per construct
//!     ↓
//!  [rngrpc_template::expand] with the fixed templates in [`java`]
//!     ↓
//!  [emit]        one GeneratedFile per schema file
//!     ↓
//! CodeGeneratorResponse
//! ```
//!
//! Every construct (message, method, file) gets freshly built binding tables.
//! Only the file-level [`walker::FileAccumulator`] is shared between sibling
//! constructs, and it only receives already-expanded text.
//!
//! # Usage
//!
//! ```rust,no_run
//! use prost::Message;
//! use prost_types::compiler::CodeGeneratorRequest;
//! use rngrpc_codegen::protocol;
//!
//! let bytes: Vec<u8> = std::fs::read("request.bin").unwrap();
//! let request = CodeGeneratorRequest::decode(bytes.as_slice()).unwrap();
//! let response = protocol::handle_request(&request);
//! assert!(response.error.is_none());
//! ```
//!
//! # Field Support
//!
//! - **Scalars**: `bool`, every 32/64-bit integer kind, `float`, `double`, `string`
//! - **Messages**: converted through the referenced message's transformer
//! - **Skipped**: `enum`, `bytes`, groups and every `repeated` field (maps included)

pub mod descriptor;
pub mod emit;
pub mod index;
pub mod java;
pub mod kinds;
pub mod model;
pub mod naming;
pub mod protocol;
pub mod walker;

pub use emit::{GeneratedFile, generate, generate_file};
pub use index::SchemaIndex;
pub use model::{FieldKind, FieldModel, FileModel, MessageModel, MethodModel, ServiceModel};
pub use walker::{FileAccumulator, Walker};
