#![allow(non_snake_case)]

use super::*;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileOptions, MethodDescriptorProto,
    ServiceDescriptorProto,
};
use tempfile::TempDir;

fn greeter_set() -> FileDescriptorSet {
    let string_field = |name: &str| FieldDescriptorProto {
        name: Some(name.into()),
        number: Some(1),
        label: Some(Label::Optional as i32),
        r#type: Some(Type::String as i32),
        ..Default::default()
    };

    let greeter = FileDescriptorProto {
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
            java_outer_classname: Some("GreeterProto".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let types = FileDescriptorProto {
        name: Some("types.proto".into()),
        package: Some("types".into()),
        ..Default::default()
    };

    FileDescriptorSet {
        file: vec![greeter, types],
    }
}

fn write_set(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("schema.pb");
    fs::write(&path, greeter_set().encode_to_vec()).unwrap();
    path
}

fn args(dir: &TempDir) -> GenerateArgs {
    GenerateArgs {
        descriptor_set: write_set(dir),
        output: dir.path().join("out"),
        config: None,
        parameter: None,
        files: Vec::new(),
    }
}

// ============================================================================
// run
// ============================================================================

#[test]
fn run___no_file_filter___generates_every_file() {
    let dir = TempDir::new().unwrap();
    let args = args(&dir);

    run(&args, None).unwrap();

    assert!(args.output.join("com/grpc/GreeterProtoModule.java").is_file());
    assert!(args.output.join("types/TypesModule.java").is_file());
}

#[test]
fn run___file_filter___generates_selected_only() {
    let dir = TempDir::new().unwrap();
    let args = GenerateArgs {
        files: vec!["greeter.proto".into()],
        ..args(&dir)
    };

    run(&args, None).unwrap();

    assert!(args.output.join("com/grpc/GreeterProtoModule.java").is_file());
    assert!(!args.output.join("types").exists());
}

#[test]
fn run___config_and_parameter___parameter_wins() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("rngrpc.toml");
    fs::write(&config, "package = \"com.app\"\nmodule_suffix = \"Bridge\"\n").unwrap();
    let args = GenerateArgs {
        config: Some(config),
        parameter: Some("module_suffix=Native".into()),
        files: vec!["greeter.proto".into()],
        ..args(&dir)
    };

    run(&args, None).unwrap();

    let content =
        fs::read_to_string(args.output.join("com/app/GreeterProtoNative.java")).unwrap();
    assert!(content.starts_with("// Generated by protoc-gen-rngrpc from greeter.proto."));
    assert!(content.contains("package com.app;"));
    assert!(content.contains("import com.grpc.*;"));
}

#[test]
fn run___unknown_file___fails() {
    let dir = TempDir::new().unwrap();
    let args = GenerateArgs {
        files: vec!["missing.proto".into()],
        ..args(&dir)
    };

    let err = run(&args, None).unwrap_err();

    assert_eq!(err.to_string(), "Generation failed");
    assert!(format!("{err:#}").contains("missing.proto"));
}

#[test]
fn run___missing_descriptor_set___fails_with_path() {
    let dir = TempDir::new().unwrap();
    let args = GenerateArgs {
        descriptor_set: dir.path().join("nope.pb"),
        ..args(&dir)
    };

    let err = run(&args, None).unwrap_err();

    assert!(err.to_string().contains("nope.pb"));
}

// ============================================================================
// load_options
// ============================================================================

#[test]
fn load_options___nothing___defaults() {
    let options = load_options(None, None).unwrap();

    assert_eq!(options, GeneratorOptions::default());
}

#[test]
fn load_options___invalid_toml___fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("rngrpc.toml");
    fs::write(&config, "unknown_key = 1\n").unwrap();

    let err = load_options(Some(&config), None).unwrap_err();

    assert!(err.to_string().starts_with("Failed to load config"));
}

#[test]
fn load_options___invalid_parameter___fails() {
    let err = load_options(None, Some("nokey")).unwrap_err();

    assert_eq!(err.to_string(), "Invalid parameter: nokey");
}

// ============================================================================
// read_descriptor_set
// ============================================================================

#[test]
fn read_descriptor_set___keeps_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_set(&dir);

    let files = read_descriptor_set(&path).unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["greeter.proto", "types.proto"]);
}

#[test]
fn read_descriptor_set___garbage___fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.pb");
    fs::write(&path, [0x0a, 0xff]).unwrap();

    let err = read_descriptor_set(&path).unwrap_err();

    assert!(err.to_string().starts_with("Not a FileDescriptorSet"));
}
