//! Result rendering
//!
//! Turns a normalized search response into the text handed back to the host.

mod formatter;

pub use formatter::{format_results, ResultFormatter};
