//! Conversion from protobuf descriptors to the schema model.
//!
//! `protoc` sends a fully resolved `FileDescriptorProto` for every file in the
//! request, imports included. Type names are already absolute
//! (`.pkg.Outer.Inner`) so no scope resolution happens here.

use crate::model::{FieldKind, FieldModel, FileModel, MessageModel, MethodModel, ServiceModel};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, MethodDescriptorProto,
    ServiceDescriptorProto,
};
use rngrpc_core::{GenerateError, GenerateResult};

impl FileModel {
    /// Convert a file descriptor
    pub fn from_descriptor(file: &FileDescriptorProto) -> GenerateResult<FileModel> {
        let name = file.name();
        if name.is_empty() {
            return Err(GenerateError::config("file descriptor without a name"));
        }

        let options = file.options.as_ref();

        Ok(FileModel {
            name: name.to_string(),
            package: file.package().to_string(),
            java_package: options
                .and_then(|o| o.java_package.clone())
                .filter(|p| !p.is_empty()),
            java_outer_classname: options
                .and_then(|o| o.java_outer_classname.clone())
                .filter(|c| !c.is_empty()),
            java_multiple_files: options.is_some_and(|o| o.java_multiple_files()),
            messages: file
                .message_type
                .iter()
                .map(|m| MessageModel::from_descriptor(m, name))
                .collect::<GenerateResult<Vec<_>>>()?,
            enums: file
                .enum_type
                .iter()
                .map(|e| e.name().to_string())
                .collect(),
            services: file
                .service
                .iter()
                .map(|s| ServiceModel::from_descriptor(s, name))
                .collect::<GenerateResult<Vec<_>>>()?,
        })
    }
}

impl MessageModel {
    fn from_descriptor(message: &DescriptorProto, file: &str) -> GenerateResult<MessageModel> {
        let name = message.name();
        if name.is_empty() {
            return Err(GenerateError::config(format!(
                "message without a name in {file}"
            )));
        }

        Ok(MessageModel {
            name: name.to_string(),
            fields: message
                .field
                .iter()
                .map(|f| FieldModel::from_descriptor(f, name))
                .collect::<GenerateResult<Vec<_>>>()?,
            nested: message
                .nested_type
                .iter()
                .map(|m| MessageModel::from_descriptor(m, file))
                .collect::<GenerateResult<Vec<_>>>()?,
            map_entry: message
                .options
                .as_ref()
                .is_some_and(|o| o.map_entry()),
        })
    }
}

impl FieldModel {
    fn from_descriptor(field: &FieldDescriptorProto, message: &str) -> GenerateResult<FieldModel> {
        let name = field.name();
        if name.is_empty() {
            return Err(GenerateError::config(format!(
                "field without a name in message {message}"
            )));
        }

        let ty = field
            .r#type
            .and_then(|t| Type::try_from(t).ok())
            .ok_or_else(|| {
                GenerateError::config(format!("field {message}.{name} has no resolved type"))
            })?;

        Ok(FieldModel {
            name: name.to_string(),
            json_name: field.json_name.clone().filter(|j| !j.is_empty()),
            kind: field_kind(ty, field.type_name()),
            repeated: field.label() == Label::Repeated,
        })
    }
}

impl ServiceModel {
    fn from_descriptor(service: &ServiceDescriptorProto, file: &str) -> GenerateResult<ServiceModel> {
        let name = service.name();
        if name.is_empty() {
            return Err(GenerateError::config(format!(
                "service without a name in {file}"
            )));
        }

        Ok(ServiceModel {
            name: name.to_string(),
            methods: service
                .method
                .iter()
                .map(|m| MethodModel::from_descriptor(m, name))
                .collect::<GenerateResult<Vec<_>>>()?,
        })
    }
}

impl MethodModel {
    fn from_descriptor(method: &MethodDescriptorProto, service: &str) -> GenerateResult<MethodModel> {
        let name = method.name();
        if name.is_empty() {
            return Err(GenerateError::config(format!(
                "method without a name in service {service}"
            )));
        }

        Ok(MethodModel {
            name: name.to_string(),
            input_type: method.input_type().to_string(),
            output_type: method.output_type().to_string(),
            client_streaming: method.client_streaming(),
            server_streaming: method.server_streaming(),
        })
    }
}

/// Map a descriptor type to a [`FieldKind`]
fn field_kind(ty: Type, type_name: &str) -> FieldKind {
    match ty {
        Type::Double => FieldKind::Double,
        Type::Float => FieldKind::Float,
        Type::Int64 => FieldKind::Int64,
        Type::Uint64 => FieldKind::UInt64,
        Type::Int32 => FieldKind::Int32,
        Type::Fixed64 => FieldKind::Fixed64,
        Type::Fixed32 => FieldKind::Fixed32,
        Type::Bool => FieldKind::Bool,
        Type::String => FieldKind::String,
        Type::Group => FieldKind::Group(type_name.to_string()),
        Type::Message => FieldKind::Message(type_name.to_string()),
        Type::Bytes => FieldKind::Bytes,
        Type::Uint32 => FieldKind::UInt32,
        Type::Enum => FieldKind::Enum(type_name.to_string()),
        Type::Sfixed32 => FieldKind::SFixed32,
        Type::Sfixed64 => FieldKind::SFixed64,
        Type::Sint32 => FieldKind::SInt32,
        Type::Sint64 => FieldKind::SInt64,
    }
}
