//! Field classification for the React Native bridge.
//!
//! JavaScript values cross the bridge through `ReadableMap`/`WritableMap`,
//! which only know a handful of types. Every protobuf field is classified
//! into one of those, or explicitly marked unsupported.
//!
//! # Type Mappings
//!
//! | Protobuf | Bridge type | Set wrapper | Get wrapper |
//! |----------|-------------|-------------|-------------|
//! | `bool` | `Boolean` | | |
//! | `int32`, `uint32`, `sint32`, `fixed32`, `sfixed32` | `Int` | | |
//! | `int64`, `uint64`, `sint64`, `fixed64`, `sfixed64` | `Double` | `(long) ` | |
//! | `float` | `Double` | `(float) ` | |
//! | `double` | `Double` | | |
//! | `string` | `String` | | |
//! | message `T` | `Map` | `TTransformer.fromReadableMap(…)` | `TTransformer.toWritableMap(…)` |
//! | `enum`, `bytes`, group, `repeated` | unsupported | | |

use crate::model::{FieldKind, FieldModel};
use std::fmt;

/// Value type understood by `ReadableMap.getX` / `WritableMap.putX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeType {
    Boolean,
    Int,
    Double,
    String,
    Map,
}

impl BridgeType {
    /// Suffix of the accessor methods, e.g. `Int` in `getInt`/`putInt`
    pub fn accessor(&self) -> &'static str {
        match self {
            BridgeType::Boolean => "Boolean",
            BridgeType::Int => "Int",
            BridgeType::Double => "Double",
            BridgeType::String => "String",
            BridgeType::Map => "Map",
        }
    }
}

/// Why a field cannot cross the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    Enum,
    Bytes,
    Group,
    Repeated,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unsupported::Enum => write!(f, "enum"),
            Unsupported::Bytes => write!(f, "bytes"),
            Unsupported::Group => write!(f, "group"),
            Unsupported::Repeated => write!(f, "repeated"),
        }
    }
}

/// Classification of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldClass<'a> {
    /// Read and written directly through the map accessors
    Scalar {
        bridge: BridgeType,
        /// Narrowing cast applied to the value read from the map
        set_cast: Option<&'static str>,
    },
    /// Converted through the referenced message's transformer
    Message { type_name: &'a str },
    /// Dropped from every sequence of its construct
    Unsupported(Unsupported),
}

/// Classify a field
pub fn classify(field: &FieldModel) -> FieldClass<'_> {
    if field.repeated {
        return FieldClass::Unsupported(Unsupported::Repeated);
    }

    let scalar = |bridge, set_cast| FieldClass::Scalar { bridge, set_cast };

    match &field.kind {
        FieldKind::Bool => scalar(BridgeType::Boolean, None),
        FieldKind::Int32
        | FieldKind::UInt32
        | FieldKind::SInt32
        | FieldKind::Fixed32
        | FieldKind::SFixed32 => scalar(BridgeType::Int, None),
        FieldKind::Int64
        | FieldKind::UInt64
        | FieldKind::SInt64
        | FieldKind::Fixed64
        | FieldKind::SFixed64 => scalar(BridgeType::Double, Some("(long) ")),
        FieldKind::Float => scalar(BridgeType::Double, Some("(float) ")),
        FieldKind::Double => scalar(BridgeType::Double, None),
        FieldKind::String => scalar(BridgeType::String, None),
        FieldKind::Message(type_name) => FieldClass::Message { type_name },
        FieldKind::Enum(_) => FieldClass::Unsupported(Unsupported::Enum),
        FieldKind::Bytes => FieldClass::Unsupported(Unsupported::Bytes),
        FieldKind::Group(_) => FieldClass::Unsupported(Unsupported::Group),
    }
}
