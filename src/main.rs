//! bwedit CLI application entry point
//!
//! This is the main executable for bwedit. It opens the interactive editor
//! by default and offers batch subcommands for scripting.
//!
//! # Usage
//!
//! ```bash
//! # Open an export in the editor (default command)
//! bwedit bitwarden_export.json
//! bwedit edit bitwarden_export.json -o ~/exports
//!
//! # List logins matching "gmail"
//! bwedit list bitwarden_export.json -s gmail -t login
//! bwedit list bitwarden_export.json --format csv
//!
//! # Delete every item without a folder, without asking
//! bwedit delete bitwarden_export.json --folder none --yes
//!
//! # Move everything matching "bank" into the Banking folder
//! bwedit move bitwarden_export.json -s bank --to Banking
//!
//! # Rename one item
//! bwedit rename bitwarden_export.json 3f2a... --name "Work mail"
//!
//! # Quiet mode (only output results)
//! bwedit -q list bitwarden_export.json
//! ```
//!
//! # Configuration
//!
//! Defaults live in the user's config directory
//! (`~/.config/bwedit/config.toml` on Linux), created on first run.

use bwedit::{
    BwEditError,
    cli::{Cli, Commands},
    commands::{
        self,
        batch::{self, BatchContext},
    },
    config::EditorConfig,
    logging::{self, LogTarget},
    session::{ActionOutcome, Confirmer, Preapproved},
    ui::{DialoguerInput, OutputWriter, StdoutWriter},
};
use std::process::ExitCode;
use tracing::info;

type Result<T> = std::result::Result<T, BwEditError>;

/// Report a batch outcome the session did not already report
fn finish(outcome: &ActionOutcome, output: &dyn OutputWriter) {
    if matches!(outcome, ActionOutcome::Cancelled) {
        output.info("Cancelled.");
    }
}

/// Dispatch the parsed command
///
/// # Errors
///
/// Returns `BwEditError` if loading the configuration or running the
/// command fails.
fn run(cli: &Cli, command: Commands) -> Result<()> {
    if let Commands::Completions { shell } = command {
        commands::completions(shell);
        return Ok(());
    }

    let config = EditorConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::quiet(quiet);
    let input = DialoguerInput::new();

    match command {
        Commands::Edit { file, output: dir } => {
            commands::edit(file.as_deref(), dir.as_deref(), &config)?;
        }
        Commands::List {
            file,
            filter,
            format,
        } => {
            commands::list(&file, &filter, format, quiet)?;
        }
        Commands::Delete {
            file,
            filter,
            yes,
            output: dir,
        } => {
            let mut session = commands::open_session(&file, config.confirm_deletes, &output)?;
            let export_dir = dir.unwrap_or_else(|| config.export_dir());
            let approved = Preapproved(true);
            let confirmer: &dyn Confirmer = if yes { &approved } else { &input };
            let ctx = BatchContext {
                export_dir: &export_dir,
                input: &input,
                output: &output,
            };
            finish(&batch::delete(&mut session, &filter, confirmer, &ctx)?, &output);
        }
        Commands::Move {
            file,
            filter,
            to,
            output: dir,
        } => {
            let mut session = commands::open_session(&file, config.confirm_deletes, &output)?;
            let export_dir = dir.unwrap_or_else(|| config.export_dir());
            let ctx = BatchContext {
                export_dir: &export_dir,
                input: &input,
                output: &output,
            };
            finish(
                &batch::move_items(&mut session, &filter, to.as_deref(), &ctx)?,
                &output,
            );
        }
        Commands::Rename {
            file,
            id,
            name,
            folder,
            output: dir,
        } => {
            let mut session = commands::open_session(&file, config.confirm_deletes, &output)?;
            let export_dir = dir.unwrap_or_else(|| config.export_dir());
            let ctx = BatchContext {
                export_dir: &export_dir,
                input: &input,
                output: &output,
            };
            finish(
                &batch::rename(&mut session, &id, name.as_deref(), folder.as_deref(), &ctx)?,
                &output,
            );
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    logging::init(if command.is_interactive() {
        LogTarget::Interactive
    } else {
        LogTarget::Console
    });

    match run(&cli, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            info!(error = %e, "command failed");
            StdoutWriter::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
