//! Emission shell: one Java artifact per schema file.
//!
//! Drives the [`Walker`] over a file, assembles the file-level bindings and
//! expands [`java::FILE`]. No generation decisions are made here beyond
//! naming the artifact.

use crate::index::SchemaIndex;
use crate::java;
use crate::model::FileModel;
use crate::walker::Walker;
use rngrpc_core::{GenerateError, GenerateResult, GeneratorOptions};
use rngrpc_template::{Scalars, Sequences, expand_report};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Package used when neither the options nor the file name one
pub const DEFAULT_PACKAGE: &str = "rngrpc";

/// A generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory, `/`-separated
    pub name: String,
    pub content: String,
}

/// Java package and class of the module generated for a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNaming {
    java_package: String,
    class_name: String,
}

impl ModuleNaming {
    pub fn new(file: &FileModel, options: &GeneratorOptions) -> Self {
        let java_package = [
            options.package.as_deref(),
            file.java_package.as_deref(),
            Some(file.package.as_str()),
        ]
        .into_iter()
        .flatten()
        .find(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PACKAGE)
        .to_string();

        Self {
            java_package,
            class_name: format!("{}{}", file.outer_class_name(), options.module_suffix),
        }
    }

    pub fn java_package(&self) -> &str {
        &self.java_package
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// `com.grpc.GreeterModule`
    pub fn qualified_class(&self) -> String {
        format!("{}.{}", self.java_package, self.class_name)
    }

    /// `com/grpc/GreeterModule.java`
    pub fn artifact_path(&self) -> String {
        format!(
            "{}/{}.java",
            self.java_package.replace('.', "/"),
            self.class_name
        )
    }
}

/// Imports bringing the protobuf and gRPC classes of `file` into scope
///
/// Classes in the default package cannot be imported, so a file without a
/// Java package gets none.
pub fn proto_imports(file: &FileModel, naming: &ModuleNaming) -> Vec<String> {
    let package = file.proto_java_package();
    if package.is_empty() {
        return Vec::new();
    }

    let mut imports = Vec::new();
    if package != naming.java_package() {
        imports.push(format!("{package}.*"));
    }
    if !file.java_multiple_files {
        imports.push(format!("{package}.{}.*", file.outer_class_name()));
    }
    imports
}

/// Generate the artifact for one file
///
/// Returns `None` when `skip_empty` is set and the file declares no service.
pub fn generate_file(
    file: &FileModel,
    index: &SchemaIndex<'_>,
    options: &GeneratorOptions,
) -> GenerateResult<Option<GeneratedFile>> {
    if options.skip_empty && file.services.is_empty() {
        debug!(file = %file.name, "no services, skipping");
        return Ok(None);
    }

    let walker = Walker::new(file, index, options);
    let accumulator = walker.walk()?;
    let naming = ModuleNaming::new(file, options);

    let scalars = Scalars::builder()
        .bind("sourceFile", &file.name)
        .bind("package", naming.java_package())
        .bind("moduleName", naming.class_name())
        .build();

    let mut sequences = Sequences::builder();
    sequences.extend("protoImports", proto_imports(file, &naming));
    accumulator.bind(&mut sequences);

    let expansion = expand_report(java::FILE, &scalars, &sequences.build());
    let content = walker.finish(&format!("file {}", file.name), expansion)?;

    Ok(Some(GeneratedFile {
        name: naming.artifact_path(),
        content,
    }))
}

/// Generate every file named in `to_generate`
///
/// `files` is every file of the request, dependencies included, so types
/// from imports resolve.
pub fn generate(
    files: &[FileModel],
    to_generate: &[String],
    options: &GeneratorOptions,
) -> GenerateResult<Vec<GeneratedFile>> {
    let index = SchemaIndex::build(files);
    let mut generated = Vec::with_capacity(to_generate.len());

    for name in to_generate {
        let file = files
            .iter()
            .find(|f| f.name == *name)
            .ok_or_else(|| GenerateError::UnknownFile(name.clone()))?;

        if let Some(artifact) = generate_file(file, &index, options)? {
            debug!(source = %file.name, artifact = %artifact.name, "generated");
            generated.push(artifact);
        }
    }

    info!(
        requested = to_generate.len(),
        generated = generated.len(),
        "generation complete"
    );
    Ok(generated)
}

/// Write artifacts below `dir`, creating directories as needed
pub fn write_files(files: &[GeneratedFile], dir: &Path) -> GenerateResult<()> {
    for file in files {
        let path = dir.join(&file.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
        debug!(path = %path.display(), "wrote artifact");
    }
    Ok(())
}
