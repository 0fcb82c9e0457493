//! Lookup of message types by fully qualified proto name.
//!
//! Method request and response types, and message-typed fields, are referenced
//! by absolute name (`.helloworld.HelloRequest`). The index maps those names
//! back to the model so the walker can read their fields, and knows which file
//! declared them so Java references can be qualified when they cross files.

use crate::model::{FileModel, MessageModel};
use crate::naming::upper_lead;
use std::collections::{BTreeMap, BTreeSet};

/// A message found in the index
#[derive(Debug, Clone, Copy)]
pub struct ResolvedMessage<'a> {
    pub model: &'a MessageModel,

    /// File declaring the message
    pub file: &'a FileModel,

    path: &'a [&'a str],
    transformer: &'a str,
}

impl<'a> ResolvedMessage<'a> {
    /// Message names from the top-level message down to this one
    pub fn path(&self) -> &'a [&'a str] {
        self.path
    }

    /// True when the message is declared in `file`
    pub fn is_declared_in(&self, file: &FileModel) -> bool {
        self.file.name == file.name
    }

    /// Java type relative to the declaring file's imports, e.g. `Outer.Inner`
    pub fn relative_java_type(&self) -> String {
        self.path.join(".")
    }

    /// Fully qualified Java type of the protobuf-generated class
    pub fn qualified_java_type(&self) -> String {
        let outer = self.file.outer_class_name();
        let package = self.file.proto_java_package();

        let mut parts: Vec<&str> = Vec::with_capacity(self.path.len() + 2);
        if !package.is_empty() {
            parts.push(package);
        }
        if !self.file.java_multiple_files {
            parts.push(&outer);
        }
        parts.extend_from_slice(self.path);

        parts.join(".")
    }

    /// Java type as seen from `file`
    pub fn java_type_from(&self, file: &FileModel) -> String {
        if self.is_declared_in(file) {
            self.relative_java_type()
        } else {
            self.qualified_java_type()
        }
    }

    /// Name of the transformer class generated for this message
    pub fn transformer_name(&self) -> String {
        self.transformer.to_string()
    }
}

/// Index over every message of a set of files
#[derive(Debug, Default)]
pub struct SchemaIndex<'a> {
    messages: BTreeMap<String, Entry<'a>>,
}

#[derive(Debug)]
struct Entry<'a> {
    model: &'a MessageModel,
    file: &'a FileModel,
    path: Vec<&'a str>,
    transformer: String,
}

/// A message waiting for its transformer name
struct Declared<'a> {
    full_name: String,
    model: &'a MessageModel,
    path: Vec<&'a str>,
}

impl<'a> SchemaIndex<'a> {
    /// Index every message, nested ones included, of `files`
    ///
    /// A name declared twice keeps its first declaration. Transformer names
    /// are unique per file: shallower messages claim a name first, and a
    /// later clash gets a numeric suffix (`OuterInner2Transformer`).
    pub fn build(files: impl IntoIterator<Item = &'a FileModel>) -> Self {
        let mut index = SchemaIndex::default();
        for file in files {
            let prefix = package_prefix(&file.package);
            let mut declared = Vec::new();
            for message in &file.messages {
                collect(&prefix, message, Vec::new(), &mut declared);
            }
            declared.sort_by_key(|d| (d.model.map_entry, d.path.len()));

            let mut taken = BTreeSet::new();
            for Declared {
                full_name,
                model,
                path,
            } in declared
            {
                if index.messages.contains_key(&full_name) {
                    continue;
                }
                let transformer = unique_transformer_name(&path, &mut taken);
                index.messages.insert(
                    full_name,
                    Entry {
                        model,
                        file,
                        path,
                        transformer,
                    },
                );
            }
        }
        index
    }

    /// Transformer class name of a message declared in `file`
    ///
    /// Falls back to [`transformer_name`] when another file owns the name.
    pub fn transformer_for(&self, file: &FileModel, path: &[&str]) -> String {
        let full_name = format!("{}.{}", package_prefix(&file.package), path.join("."));
        match self.messages.get(&full_name) {
            Some(entry) if entry.file.name == file.name => entry.transformer.clone(),
            _ => transformer_name(path),
        }
    }

    /// Look up a message by fully qualified name
    ///
    /// The leading dot is optional.
    pub fn resolve(&self, full_name: &str) -> Option<ResolvedMessage<'_>> {
        let entry = match full_name.strip_prefix('.') {
            Some(_) => self.messages.get(full_name),
            None => self.messages.get(&format!(".{full_name}")),
        }?;

        Some(ResolvedMessage {
            model: entry.model,
            file: entry.file,
            path: &entry.path,
            transformer: &entry.transformer,
        })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Indexed names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}

fn package_prefix(package: &str) -> String {
    if package.is_empty() {
        String::new()
    } else {
        format!(".{package}")
    }
}

fn collect<'a>(
    prefix: &str,
    message: &'a MessageModel,
    mut path: Vec<&'a str>,
    out: &mut Vec<Declared<'a>>,
) {
    let full_name = format!("{prefix}.{}", message.name);
    path.push(&message.name);

    for nested in &message.nested {
        collect(&full_name, nested, path.clone(), out);
    }

    out.push(Declared {
        full_name,
        model: message,
        path,
    });
}

fn unique_transformer_name(path: &[&str], taken: &mut BTreeSet<String>) -> String {
    let base = transformer_name(path);
    if taken.insert(base.clone()) {
        return base;
    }

    let stem = base.strip_suffix("Transformer").unwrap_or(&base);
    let mut suffix = 2usize;
    loop {
        let candidate = format!("{stem}{suffix}Transformer");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Transformer class name for a message path
///
/// `["Outer", "Inner"]` becomes `OuterInnerTransformer`, so nested messages
/// with the same simple name do not clash. [`SchemaIndex::build`] resolves
/// the remaining clashes within one file.
pub fn transformer_name(path: &[&str]) -> String {
    let mut name: String = path.iter().map(|segment| upper_lead(segment)).collect();
    name.push_str("Transformer");
    name
}

/// Best-effort Java type for a name missing from the index
///
/// Drops the leading dot and the file's own package, then upper-leads the
/// last segment: `.helloworld.helloRequest` in package `helloworld` becomes
/// `HelloRequest`.
pub fn fallback_java_type(full_name: &str, package: &str) -> String {
    let name = full_name.strip_prefix('.').unwrap_or(full_name);
    let name = if package.is_empty() {
        name
    } else {
        name.strip_prefix(package)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(name)
    };

    match name.rsplit_once('.') {
        Some((qualifier, last)) => format!("{qualifier}.{}", upper_lead(last)),
        None => upper_lead(name),
    }
}

#[cfg(test)]
#[path = "index/index_tests.rs"]
mod index_tests;
