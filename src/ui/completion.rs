//! Shell completion scripts for archive

use clap::Command;
use clap_complete::{Generator, generate};
use std::io::Write;

/// Write the completion script for `generator` to `out`
pub fn write_completions<G: Generator>(generator: G, app: &mut Command, out: &mut dyn Write) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}

/// Generate shell completions for the given shell on stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}
