//! Script module to C string literal transcoding
//!
//! Each source line becomes one quoted segment. Segments are separated by a
//! real newline and rely on C's adjacent-literal concatenation, so the
//! generated fragment stays readable and diffs line by line with its source.

use encoding_rs::UTF_8;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::GenerateConfig;
use crate::domain::{Declaration, Dialect, SourceModule, EMPTY_LITERAL, OPTIONAL_PREFIX};
use crate::error::TranscodeError;

/// Escape one line for use inside a double-quoted C literal.
///
/// The opening quote is not included; the closing quote is. Backslashes are
/// doubled before quotes are escaped so the inserted backslashes are never
/// escaped again. A `?` following another `?` is written as `\?`, so the
/// output never contains a trigraph in ISO C modes before C23.
pub fn escape_line(line: &str) -> String {
    let escaped = break_trigraphs(&line.replace('\\', "\\\\").replace('"', "\\\""));
    match escaped.strip_suffix('\n') {
        Some(body) => format!("{}\\n\"", body),
        // Last line of a file without a trailing newline.
        None => format!("{}\"", escaped),
    }
}

fn break_trigraphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '?' && out.ends_with('?') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Join escaped lines into a multi-segment C literal.
///
/// Returns `""` when there are no lines.
pub fn to_c_literal<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut literal = String::new();
    for line in lines {
        if !literal.is_empty() {
            literal.push('\n');
        }
        literal.push('"');
        literal.push_str(&escape_line(line.as_ref()));
    }

    if literal.is_empty() {
        EMPTY_LITERAL.to_string()
    } else {
        literal
    }
}

/// Decode a literal produced by [`to_c_literal`] back into text.
///
/// Whitespace between segments is skipped, matching how a C compiler
/// concatenates adjacent literals. Only the escapes the generator emits are
/// decoded (`\\`, `\"`, `\?` and `\n`); anything else is kept as written.
pub fn unescape_literal(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    let mut in_segment = false;

    while let Some(c) = chars.next() {
        if !in_segment {
            if c == '"' {
                in_segment = true;
            }
            continue;
        }

        match c {
            '"' => in_segment = false,
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some('?') => out.push('?'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            _ => out.push(c),
        }
    }

    out
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Split text after every `\n`, keeping the terminator on each line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

/// Derive the module name from a source path.
///
/// Uses the file stem, then strips a leading `opt_` and after that the
/// dialect's own prefix (`msc_` or `wren_`). Only leading occurrences are
/// stripped, so a token in the middle of a name survives. The result is not
/// checked for being a valid C identifier.
pub fn derive_module_name(path: &Path, dialect: Dialect) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let name = stem.strip_prefix(OPTIONAL_PREFIX).unwrap_or(&stem);
    let name = name.strip_prefix(dialect.module_prefix()).unwrap_or(name);
    name.to_string()
}

/// Read and split a source module from disk.
pub fn read_source_module(path: &Path) -> Result<SourceModule, TranscodeError> {
    let bytes = fs::read(path)
        .map_err(|source| TranscodeError::Read { path: path.to_path_buf(), source })?;

    // A UTF-8 BOM is kept as module content.
    let text = UTF_8
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or_else(|| TranscodeError::Decode { path: path.to_path_buf() })?;

    let dialect = Dialect::from_path(path);
    let lines = split_lines(&normalize_newlines(&text));

    Ok(SourceModule {
        path: path.to_path_buf(),
        dialect,
        name: derive_module_name(path, dialect),
        lines,
    })
}

/// Build the declaration for an already-read module.
pub fn render_declaration(module: &SourceModule) -> Declaration {
    Declaration {
        input_path: module.path.clone(),
        module_name: module.name.clone(),
        literal: to_c_literal(&module.lines),
    }
}

/// Generate the declaration text for the module at `input_path`.
pub fn generate(input_path: &Path) -> Result<String, TranscodeError> {
    let module = read_source_module(input_path)?;
    debug!(
        path = %module.path.display(),
        module = %module.name,
        dialect = ?module.dialect,
        lines = module.lines.len(),
        "Read source module"
    );
    Ok(render_declaration(&module).to_string())
}

/// Generate the declaration and write it to the configured output path.
pub fn run(config: GenerateConfig) -> Result<(), TranscodeError> {
    let GenerateConfig { output_path, input_path } = config;

    let generated = generate(&input_path)?;
    fs::write(&output_path, &generated)
        .map_err(|source| TranscodeError::Write { path: output_path.clone(), source })?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        bytes = generated.len(),
        "Wrote generated module source"
    );
    Ok(())
}
