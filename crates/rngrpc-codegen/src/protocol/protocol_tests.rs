#![allow(non_snake_case)]

use super::*;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileOptions, MethodDescriptorProto,
    ServiceDescriptorProto,
};

fn string_field(name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.into()),
        number: Some(1),
        label: Some(Label::Optional as i32),
        r#type: Some(Type::String as i32),
        json_name: Some(name.into()),
        ..Default::default()
    }
}

fn greeter_descriptor() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("greeter.proto".into()),
        package: Some("helloworld".into()),
        message_type: vec![
            DescriptorProto {
                name: Some("HelloRequest".into()),
                field: vec![string_field("name")],
                ..Default::default()
            },
            DescriptorProto {
                name: Some("HelloResponse".into()),
                field: vec![string_field("greetings")],
                ..Default::default()
            },
        ],
        service: vec![ServiceDescriptorProto {
            name: Some("Greeter".into()),
            method: vec![MethodDescriptorProto {
                name: Some("Greet".into()),
                input_type: Some(".helloworld.HelloRequest".into()),
                output_type: Some(".helloworld.HelloResponse".into()),
                ..Default::default()
            }],
            ..Default::default()
        }],
        options: Some(FileOptions {
            java_package: Some("com.grpc".into()),
            ..Default::default()
        }),
        syntax: Some("proto3".into()),
        ..Default::default()
    }
}

fn greeter_request(parameter: Option<&str>) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: vec!["greeter.proto".into()],
        parameter: parameter.map(str::to_string),
        proto_file: vec![greeter_descriptor()],
        ..Default::default()
    }
}

#[test]
fn handle_request___greeter___one_file() {
    let response = handle_request(&greeter_request(None));

    assert_eq!(response.error, None);
    assert_eq!(response.supported_features, Some(FEATURE_PROTO3_OPTIONAL));
    assert_eq!(response.file.len(), 1);
    assert_eq!(response.file[0].name(), "com/grpc/GreeterOuterClassModule.java");
    assert!(response.file[0].content().contains("public void greet(ReadableMap message, Promise promise) {"));
}

#[test]
fn handle_request___parameter___is_applied() {
    let response = handle_request(&greeter_request(Some("package=com.app,module_suffix=Bridge")));

    assert_eq!(response.error, None);
    assert_eq!(response.file[0].name(), "com/app/GreeterOuterClassBridge.java");
    assert!(response.file[0].content().contains("import com.grpc.*;"));
}

#[test]
fn handle_request___invalid_parameter___sets_error() {
    let response = handle_request(&greeter_request(Some("colour=blue")));

    assert!(response.file.is_empty());
    let error = response.error.unwrap();
    assert!(error.starts_with("invalid generator parameter"), "{error}");
}

#[test]
fn handle_request___malformed_parameter___sets_error() {
    let response = handle_request(&greeter_request(Some("strict")));

    assert!(response.error.unwrap().contains("missing '='"));
}

#[test]
fn handle_request___unknown_file___sets_error() {
    let mut request = greeter_request(None);
    request.file_to_generate = vec!["other.proto".into()];

    let response = handle_request(&request);

    assert_eq!(
        response.error.as_deref(),
        Some("file not found in request: other.proto")
    );
}

#[test]
fn handle_request___nothing_to_generate___empty_response() {
    let mut request = greeter_request(None);
    request.file_to_generate.clear();

    let response = handle_request(&request);

    assert_eq!(response.error, None);
    assert!(response.file.is_empty());
}

#[test]
fn handle_request_bytes___round_trips_through_wire_format() {
    let bytes = greeter_request(None).encode_to_vec();

    let out = handle_request_bytes(&bytes).unwrap();

    let response = CodeGeneratorResponse::decode(out.as_slice()).unwrap();
    assert_eq!(response.file.len(), 1);
}

#[test]
fn handle_request_bytes___garbage___is_fatal_error() {
    let err = handle_request_bytes(&[0xff, 0xff, 0xff]).unwrap_err();

    assert!(matches!(err, GenerateError::RequestDecode(_)));
    assert!(err.is_fatal());
}

#[test]
fn request_options___empty_parameter___defaults() {
    let options = request_options(&greeter_request(None)).unwrap();

    assert_eq!(options, GeneratorOptions::default());
}

#[test]
fn error_response___carries_message() {
    let response = error_response(&GenerateError::config("broken"));

    assert_eq!(response.error.as_deref(), Some("configuration error: broken"));
    assert!(response.file.is_empty());
}
