//! Schema model consumed by the walker.
//!
//! A simplified, ordered view of one `.proto` file. Every list keeps
//! declaration order; the walker relies on that for deterministic output.
//!
//! # Structure
//!
//! - [`FileModel`]: messages, top-level enum names and services of one file
//! - [`MessageModel`]: fields and nested messages
//! - [`FieldModel`]: name, kind and cardinality of a field
//! - [`FieldKind`]: the protobuf field type, with the referenced type name
//!   for enums, messages and groups
//! - [`ServiceModel`] / [`MethodModel`]: RPCs with request and response types
//!
//! Models are usually built from descriptors (see [`crate::descriptor`]), but
//! the constructors below keep tests short.

use crate::naming::{java_accessor_suffix, to_camel_case, to_pascal_case};

/// One `.proto` file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileModel {
    /// Path as protoc reports it, e.g. `helloworld/greeter.proto`
    pub name: String,

    /// Proto package, empty when the file declares none
    pub package: String,

    /// `option java_package`
    pub java_package: Option<String>,

    /// `option java_outer_classname`
    pub java_outer_classname: Option<String>,

    /// `option java_multiple_files`
    pub java_multiple_files: bool,

    /// Top-level messages
    pub messages: Vec<MessageModel>,

    /// Top-level enum names
    pub enums: Vec<String>,

    pub services: Vec<ServiceModel>,
}

/// A message type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageModel {
    pub name: String,
    pub fields: Vec<FieldModel>,
    pub nested: Vec<MessageModel>,

    /// Synthesized by protoc for a `map<K, V>` field
    pub map_entry: bool,
}

/// A message field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldModel {
    /// Name as declared, usually snake_case
    pub name: String,

    /// lowerCamelCase name computed by protoc
    pub json_name: Option<String>,

    pub kind: FieldKind,

    /// `repeated` label, which includes map fields
    pub repeated: bool,
}

/// Protobuf field type
///
/// Type names are fully qualified with a leading dot, as in descriptors
/// (`.helloworld.HelloRequest`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Double,
    Float,
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    Bool,
    String,
    Bytes,
    Enum(String),
    Message(String),
    Group(String),
}

/// A service definition
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceModel {
    pub name: String,
    pub methods: Vec<MethodModel>,
}

/// An RPC
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodModel {
    pub name: String,

    /// Fully qualified request type
    pub input_type: String,

    /// Fully qualified response type
    pub output_type: String,

    pub client_streaming: bool,
    pub server_streaming: bool,
}

impl FileModel {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: MessageModel) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_service(mut self, service: ServiceModel) -> Self {
        self.services.push(service);
        self
    }

    /// File name without directories and without the `.proto` extension
    pub fn base_name(&self) -> &str {
        let file = self.name.rsplit('/').next().unwrap_or(&self.name);
        file.strip_suffix(".proto").unwrap_or(file)
    }

    /// Java package holding the protobuf-generated classes
    ///
    /// `java_package` when set, else the proto package.
    pub fn proto_java_package(&self) -> &str {
        self.java_package.as_deref().unwrap_or(&self.package)
    }

    /// Outer class protobuf-java generates for this file
    ///
    /// `java_outer_classname` when set. Otherwise the PascalCase base name,
    /// with `OuterClass` appended when a top-level type already uses it.
    pub fn outer_class_name(&self) -> String {
        if let Some(name) = &self.java_outer_classname {
            return name.clone();
        }

        let candidate = to_pascal_case(self.base_name());
        let collides = self.messages.iter().any(|m| m.name == candidate)
            || self.enums.iter().any(|e| *e == candidate)
            || self.services.iter().any(|s| s.name == candidate);

        if collides {
            format!("{candidate}OuterClass")
        } else {
            candidate
        }
    }
}

impl MessageModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_nested(mut self, nested: MessageModel) -> Self {
        self.nested.push(nested);
        self
    }
}

impl FieldModel {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            json_name: None,
            kind,
            repeated: false,
        }
    }

    /// Mark the field as `repeated`
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Key of the field in the JavaScript map
    pub fn map_key(&self) -> String {
        match &self.json_name {
            Some(json) if !json.is_empty() => json.clone(),
            _ => to_camel_case(&self.name),
        }
    }

    /// Suffix of the generated `get`/`set` accessors
    ///
    /// protobuf-java derives it from the declared name, never from `json_name`.
    pub fn accessor_suffix(&self) -> String {
        java_accessor_suffix(&self.name)
    }
}

impl ServiceModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodModel) -> Self {
        self.methods.push(method);
        self
    }
}

impl MethodModel {
    /// A unary RPC
    pub fn unary(
        name: impl Into<String>,
        input_type: impl Into<String>,
        output_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
            client_streaming: false,
            server_streaming: false,
        }
    }

    pub fn is_unary(&self) -> bool {
        !self.client_streaming && !self.server_streaming
    }
}
