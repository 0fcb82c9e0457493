//! Schema walker.
//!
//! The walker turns each construct of a [`FileModel`] into template bindings
//! and expands it right away:
//!
//! - **Message**: `messageName`, `transformerName` and `nestedMessages` plus
//!   the seven field sequences. Nested messages are expanded first, depth
//!   first, and their text concatenated into `nestedMessages`.
//! - **Method**: `methodName`, `serviceName`, `inputKind`, `outputKind` plus
//!   the field sequences of the request (`input…`) and response (`output…`).
//!
//! Each construct gets its own [`Scalars`] and [`Sequences`]. Expanded text
//! is handed to a [`FileAccumulator`], the only state shared between
//! siblings.

use crate::emit::ModuleNaming;
use crate::index::{SchemaIndex, fallback_java_type, transformer_name};
use crate::java;
use crate::kinds::{BridgeType, FieldClass, classify};
use crate::model::{FieldModel, FileModel, MessageModel, MethodModel, ServiceModel};
use crate::naming::{lower_lead, upper_lead};
use rngrpc_core::{GenerateError, GenerateResult, GeneratorOptions};
use rngrpc_template::{Expansion, Scalars, Sequences, SequencesBuilder, expand_report};
use tracing::{debug, warn};

/// Base names of the seven co-indexed field sequences
const FIELD_SEQUENCES: [&str; 7] = [
    "fieldNamesLower",
    "fieldNamesUpper",
    "fieldTypes",
    "setPrefixes",
    "setSuffixes",
    "getPrefixes",
    "getSuffixes",
];

/// One supported field, as the templates see it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessor {
    /// Map key, e.g. `displayName`
    pub name_lower: String,
    /// Builder/getter suffix, e.g. `DisplayName`
    pub name_upper: String,
    /// `ReadableMap`/`WritableMap` accessor suffix
    pub bridge_type: &'static str,
    pub set_prefix: String,
    pub set_suffix: String,
    pub get_prefix: String,
    pub get_suffix: String,
}

/// Field sequences of one message, kept co-indexed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSequences {
    accessors: Vec<FieldAccessor>,
}

impl FieldSequences {
    pub fn accessors(&self) -> &[FieldAccessor] {
        &self.accessors
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    /// Bind all seven sequences, prefixing each name with `prefix`
    ///
    /// Every name is bound even with no fields, so the accessor lines vanish
    /// instead of leaving unbound markers behind.
    pub fn bind(&self, builder: &mut SequencesBuilder, prefix: &str) {
        let [lower, upper, types, set_prefixes, set_suffixes, get_prefixes, get_suffixes] =
            FIELD_SEQUENCES.map(|base| sequence_name(prefix, base));

        builder
            .extend(lower, self.accessors.iter().map(|a| a.name_lower.as_str()))
            .extend(upper, self.accessors.iter().map(|a| a.name_upper.as_str()))
            .extend(types, self.accessors.iter().map(|a| a.bridge_type))
            .extend(set_prefixes, self.accessors.iter().map(|a| a.set_prefix.as_str()))
            .extend(set_suffixes, self.accessors.iter().map(|a| a.set_suffix.as_str()))
            .extend(get_prefixes, self.accessors.iter().map(|a| a.get_prefix.as_str()))
            .extend(get_suffixes, self.accessors.iter().map(|a| a.get_suffix.as_str()));
    }
}

fn sequence_name(prefix: &str, base: &str) -> String {
    if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{prefix}{}", upper_lead(base))
    }
}

/// Expanded text collected across the sibling constructs of one file
#[derive(Debug, Clone, Default)]
pub struct FileAccumulator {
    messages: Vec<String>,
    methods: Vec<String>,
}

impl FileAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_message(&mut self, text: String) {
        self.messages.push(text);
    }

    pub fn push_method(&mut self, text: String) {
        self.methods.push(text);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Bind `messages` and `methods`
    pub fn bind(self, builder: &mut SequencesBuilder) {
        builder
            .extend("messages", self.messages)
            .extend("methods", self.methods);
    }
}

/// Walks one file, resolving types through an index of the whole request
pub struct Walker<'a> {
    file: &'a FileModel,
    index: &'a SchemaIndex<'a>,
    options: &'a GeneratorOptions,
}

impl<'a> Walker<'a> {
    pub fn new(
        file: &'a FileModel,
        index: &'a SchemaIndex<'a>,
        options: &'a GeneratorOptions,
    ) -> Self {
        Self {
            file,
            index,
            options,
        }
    }

    /// Classify every field of `message`, dropping unsupported ones
    pub fn field_sequences(&self, message: &MessageModel) -> FieldSequences {
        let accessors = message
            .fields
            .iter()
            .filter_map(|field| self.field_accessor(&message.name, field))
            .collect();

        FieldSequences { accessors }
    }

    fn field_accessor(&self, owner: &str, field: &FieldModel) -> Option<FieldAccessor> {
        let name_lower = field.map_key();
        let name_upper = field.accessor_suffix();

        match classify(field) {
            FieldClass::Scalar { bridge, set_cast } => Some(FieldAccessor {
                name_lower,
                name_upper,
                bridge_type: bridge.accessor(),
                set_prefix: set_cast.unwrap_or_default().to_string(),
                set_suffix: String::new(),
                get_prefix: String::new(),
                get_suffix: String::new(),
            }),
            FieldClass::Message { type_name } => {
                let transformer = self.transformer_reference(type_name);
                Some(FieldAccessor {
                    name_lower,
                    name_upper,
                    bridge_type: BridgeType::Map.accessor(),
                    set_prefix: format!("{transformer}.fromReadableMap("),
                    set_suffix: ")".to_string(),
                    get_prefix: format!("{transformer}.toWritableMap("),
                    get_suffix: ")".to_string(),
                })
            }
            FieldClass::Unsupported(reason) => {
                debug!(owner, field = %field.name, %reason, "skipping field");
                None
            }
        }
    }

    /// Transformer class as referenced from this file's module
    fn transformer_reference(&self, type_name: &str) -> String {
        match self.index.resolve(type_name) {
            Some(resolved) if resolved.is_declared_in(self.file) => resolved.transformer_name(),
            Some(resolved) => {
                let module = ModuleNaming::new(resolved.file, self.options);
                format!("{}.{}", module.qualified_class(), resolved.transformer_name())
            }
            None => {
                let java_type = fallback_java_type(type_name, &self.file.package);
                let segments: Vec<&str> = java_type.split('.').collect();
                transformer_name(&segments)
            }
        }
    }

    /// Java type of a method's request or response
    fn message_kind(&self, type_name: &str) -> String {
        let java_type = match self.index.resolve(type_name) {
            Some(resolved) => resolved.java_type_from(self.file),
            None => fallback_java_type(type_name, &self.file.package),
        };

        match java_type.rsplit_once('.') {
            Some((qualifier, last)) => format!("{qualifier}.{}", upper_lead(last)),
            None => upper_lead(&java_type),
        }
    }

    /// Bindings of one message
    ///
    /// `path` holds the names from the top-level message down to `message`.
    pub fn message_bindings(
        &self,
        message: &MessageModel,
        path: &[&str],
        nested_messages: String,
    ) -> (Scalars, Sequences) {
        let scalars = Scalars::builder()
            .bind("messageName", path.join("."))
            .bind("transformerName", self.index.transformer_for(self.file, path))
            .bind("nestedMessages", nested_messages)
            .build();

        let mut sequences = Sequences::builder();
        self.field_sequences(message).bind(&mut sequences, "");

        (scalars, sequences.build())
    }

    /// Expand a message and, depth first, every nested message
    pub fn expand_message(&self, message: &MessageModel, path: &[&str]) -> GenerateResult<String> {
        let mut own_path = path.to_vec();
        own_path.push(&message.name);

        let mut nested_messages = String::new();
        for nested in message.nested.iter().filter(|n| !n.map_entry) {
            nested_messages.push_str(&self.expand_message(nested, &own_path)?);
        }

        debug!(name = %own_path.join("."), "expanding message");
        let (scalars, sequences) = self.message_bindings(message, &own_path, nested_messages);
        let expansion = expand_report(java::MESSAGE, &scalars, &sequences);
        self.finish(&format!("message {}", own_path.join(".")), expansion)
    }

    /// Expand every top-level message into `accumulator`
    pub fn walk_messages(&self, accumulator: &mut FileAccumulator) -> GenerateResult<()> {
        for message in self.file.messages.iter().filter(|m| !m.map_entry) {
            accumulator.push_message(self.expand_message(message, &[])?);
        }
        Ok(())
    }

    /// Bindings of one method
    pub fn method_bindings(&self, service: &ServiceModel, method: &MethodModel) -> (Scalars, Sequences) {
        let scalars = Scalars::builder()
            .bind("methodName", lower_lead(&method.name))
            .bind("serviceName", &service.name)
            .bind("inputKind", self.message_kind(&method.input_type))
            .bind("outputKind", self.message_kind(&method.output_type))
            .build();

        let mut sequences = Sequences::builder();
        self.type_fields(&method.input_type).bind(&mut sequences, "input");
        self.type_fields(&method.output_type).bind(&mut sequences, "output");

        (scalars, sequences.build())
    }

    fn type_fields(&self, type_name: &str) -> FieldSequences {
        match self.index.resolve(type_name) {
            Some(resolved) => self.field_sequences(resolved.model),
            None => {
                warn!(file = %self.file.name, type_name, "unresolved message type");
                FieldSequences::default()
            }
        }
    }

    pub fn expand_method(&self, service: &ServiceModel, method: &MethodModel) -> GenerateResult<String> {
        debug!(service = %service.name, method = %method.name, "expanding method");
        let (scalars, sequences) = self.method_bindings(service, method);
        let expansion = expand_report(java::METHOD, &scalars, &sequences);
        self.finish(&format!("method {}.{}", service.name, method.name), expansion)
    }

    /// Expand every unary method of every service into `accumulator`
    ///
    /// Streaming methods are skipped.
    pub fn walk_services(&self, accumulator: &mut FileAccumulator) -> GenerateResult<()> {
        for service in &self.file.services {
            for method in &service.methods {
                if !method.is_unary() {
                    warn!(
                        service = %service.name,
                        method = %method.name,
                        "skipping streaming method"
                    );
                    continue;
                }
                accumulator.push_method(self.expand_method(service, method)?);
            }
        }
        Ok(())
    }

    /// Walk the whole file
    pub fn walk(&self) -> GenerateResult<FileAccumulator> {
        let mut accumulator = FileAccumulator::new();
        self.walk_services(&mut accumulator)?;
        self.walk_messages(&mut accumulator)?;
        Ok(accumulator)
    }

    /// Report diagnostics, failing on them in strict mode
    pub(crate) fn finish(&self, construct: &str, expansion: Expansion) -> GenerateResult<String> {
        if expansion.is_clean() {
            return Ok(expansion.text);
        }

        for diagnostic in &expansion.diagnostics {
            warn!(file = %self.file.name, construct, "{diagnostic}");
        }

        if self.options.strict {
            let detail = expansion
                .diagnostics
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GenerateError::Expansion {
                construct: construct.to_string(),
                detail,
            });
        }

        Ok(expansion.text)
    }
}
