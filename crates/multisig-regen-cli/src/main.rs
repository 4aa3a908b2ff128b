//! multisig-regen — refresh the toolkit CLI's embedded contract templates.
//!
//! The toolkit's `init` command carries the basic, timelock, and weighted
//! contract templates as raw-string constants in `cli/src/commands/init.rs`.
//! After editing a template source under `templates/`, run this tool from the
//! repository root to re-embed the fresh text. It takes no arguments and no
//! configuration; the file set is fixed.

mod output;

use clap::Parser;
use multisig_regen_core::sync;

#[derive(Parser)]
#[command(
    name = "multisig-regen",
    about = "Re-embed the multisig contract templates into the CLI source",
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_target(false)
        .init();

    let root = std::path::Path::new(".");
    match sync::regenerate(root) {
        Ok(report) => {
            output::print_success("CLI templates regenerated successfully!");
            for entry in &report.entries {
                output::print_key_value(
                    &format!("{} template", entry.kind.label()),
                    &format!("{} bytes", entry.bytes),
                );
            }
        }
        Err(e) => {
            output::print_error(&format!("{:#}", anyhow::Error::from(e)));
            std::process::exit(1);
        }
    }
}
