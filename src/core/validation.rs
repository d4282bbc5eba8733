// src/core/validation.rs
use crate::error::KeyError;

/// Reserved C# keywords. A key becomes a generated accessor name, so these
/// are only usable with the verbatim `@` prefix.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Checks a translation key. Cheap checks run first so the reported error
/// is the most obvious one.
pub fn validate_key(key: &str) -> Result<(), KeyError> {
    if key.trim().is_empty() {
        return Err(KeyError::Empty);
    }
    if key.chars().any(char::is_whitespace) {
        return Err(KeyError::ContainsWhitespace);
    }

    let (verbatim, ident) = match key.strip_prefix('@') {
        Some(rest) => (true, rest),
        None => (false, key),
    };
    if !is_identifier(ident) {
        return Err(KeyError::NotAnIdentifier);
    }
    if !verbatim && CSHARP_KEYWORDS.contains(&ident) {
        return Err(KeyError::ReservedWord);
    }
    Ok(())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
