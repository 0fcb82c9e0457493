//! Naming convention utilities for code generation.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `sayHello` | [`upper_lead`] | `SayHello` |
//! | `SayHello` | [`lower_lead`] | `sayHello` |
//! | `display_name` | [`to_camel_case`] | `displayName` |
//! | `hello_world` | [`to_pascal_case`] | `HelloWorld` |
//! | `foo2bar` | [`java_accessor_suffix`] | `Foo2Bar` |
//!
//! The lead functions touch only the first character.

/// Uppercase the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use rngrpc_codegen::naming::upper_lead;
///
/// assert_eq!(upper_lead("displayName"), "DisplayName");
/// assert_eq!(upper_lead(""), "");
/// ```
pub fn upper_lead(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use rngrpc_codegen::naming::lower_lead;
///
/// assert_eq!(lower_lead("SayHello"), "sayHello");
/// assert_eq!(lower_lead("URL"), "uRL");
/// ```
pub fn lower_lead(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert snake_case to camelCase.
///
/// Used for fields whose descriptor carries no `json_name`.
///
/// # Examples
///
/// ```
/// use rngrpc_codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("display_name"), "displayName");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Accessor suffix protobuf-java derives from a declared field name.
///
/// Underscores are dropped and the next letter is uppercased, as is a letter
/// following a digit. The first letter is always uppercased.
///
/// # Examples
///
/// ```
/// use rngrpc_codegen::naming::java_accessor_suffix;
///
/// assert_eq!(java_accessor_suffix("display_name"), "DisplayName");
/// assert_eq!(java_accessor_suffix("foo2bar"), "Foo2Bar");
/// ```
pub fn java_accessor_suffix(field_name: &str) -> String {
    let mut result = String::with_capacity(field_name.len());
    let mut capitalize_next = true;

    for c in field_name.chars() {
        if c.is_ascii_lowercase() {
            if capitalize_next {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
            capitalize_next = false;
        } else if c.is_ascii_uppercase() {
            result.push(c);
            capitalize_next = false;
        } else if c.is_ascii_digit() {
            result.push(c);
            capitalize_next = true;
        } else {
            capitalize_next = true;
        }
    }

    result
}

/// Convert a file base name to PascalCase.
///
/// Handles snake_case, kebab-case and already-capitalized input.
///
/// # Examples
///
/// ```
/// use rngrpc_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// assert_eq!(to_pascal_case("greeter"), "Greeter");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_'])
        .map(upper_lead)
        .collect()
}
