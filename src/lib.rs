//! cify-mosc: embed script modules as C string literals
//!
//! This library turns a `.msc` or `.wren` source file into a `.inc` fragment
//! declaring a `static const char*` that holds the module text verbatim.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod transcode;
