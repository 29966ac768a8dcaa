//! CLI domain: parse, output, and presentation only.
//! No domain orchestration; the binary dispatches to library services.

mod output;
mod parse;
mod presentation;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_enumeration_dot, format_enumeration_json, format_tree_text};
