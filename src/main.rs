//! cify-mosc: Convert a script module into a C string literal
//!
//! Invoked by the build once per built-in module so the VM can compile the
//! module text straight into its binary instead of reading it at runtime.

use anyhow::Result;

fn main() -> Result<()> {
    cify_mosc::cli::run()
}
