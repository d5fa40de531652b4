//! Core domain types
//!
//! Defines the source module being embedded, the declaration generated from
//! it, and the script dialect that decides how module names are derived.

use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to the module name to form the C symbol.
pub const SYMBOL_SUFFIX: &str = "ModuleSource";

/// Prefix marking optional modules (`opt_meta.msc`, `opt_random.wren`).
pub const OPTIONAL_PREFIX: &str = "opt_";

/// Literal emitted for a module with no lines at all.
pub const EMPTY_LITERAL: &str = "\"\"";

/// Script dialect of the input module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Mosc,
    Wren,
}

impl Dialect {
    /// Infer the dialect from the file extension, falling back to Mosc.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("wren") => Dialect::Wren,
            _ => Dialect::Mosc,
        }
    }

    /// Filename prefix used for modules shipped with the VM.
    pub fn module_prefix(self) -> &'static str {
        match self {
            Dialect::Mosc => "msc_",
            Dialect::Wren => "wren_",
        }
    }
}

/// A script module read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    /// Path exactly as given on the command line
    pub path: PathBuf,

    /// Dialect inferred from the extension
    pub dialect: Dialect,

    /// Module name derived from the filename
    pub name: String,

    /// Lines with newlines normalised to `\n` and kept on each line
    pub lines: Vec<String>,
}

/// The generated C fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub input_path: PathBuf,
    pub module_name: String,

    /// Joined, quoted literal segments (`"..."` lines separated by `\n`)
    pub literal: String,
}

impl Declaration {
    pub fn symbol(&self) -> String {
        format!("{}{}", self.module_name, SYMBOL_SUFFIX)
    }

    /// Input path as shown in the header comment.
    ///
    /// Control characters are replaced with U+FFFD; a newline would end the
    /// `//` comment early and leave the rest of the path as C source.
    pub fn comment_path(&self) -> String {
        self.input_path
            .display()
            .to_string()
            .chars()
            .map(|c| if c.is_control() { char::REPLACEMENT_CHARACTER } else { c })
            .collect()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// Generated automatically from {}. Do not edit.", self.comment_path())?;
        writeln!(f, "static const char* {} =", self.symbol())?;
        writeln!(f, "{};", self.literal)
    }
}
