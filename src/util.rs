use std::{fs, path::Path};

/// Escapes a single assembly line so it can sit inside a C string literal.
pub fn escape_line(line: &str) -> String {
    line.replace('"', "\\\"")
}

/// Quotes assembly text as a run of C string literal fragments, one per
/// source line, each ending with an escaped `\n`.
///
/// Only the line terminator is dropped; trailing spaces are kept.
pub fn asm_to_c_string(source: &str) -> String {
    let mut result = String::with_capacity(source.len() + source.len() / 4);
    for line in source.lines() {
        result.push('"');
        result.push_str(&escape_line(line));
        result.push_str("\\n\"\n");
    }
    result
}

pub fn read_asm(file: impl AsRef<Path>) -> std::io::Result<String> {
    let source = fs::read_to_string(file.as_ref())?;
    log::info!(
        "read {} line(s) of assembly from {}",
        source.lines().count(),
        file.as_ref().display()
    );
    Ok(asm_to_c_string(&source))
}
