//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for bwedit using the `clap` crate.
//!
//! # Commands
//!
//! - **edit**: Interactive terminal editor (default)
//! - **list**: Print the items passing a filter
//! - **delete**: Delete every filtered item and export the result
//! - **move**: Move every filtered item into a folder and export
//! - **rename**: Rename one item and optionally refile it
//! - **completions**: Generate shell completion scripts
//!
//! # Design Features
//!
//! - `bwedit <FILE>` is shorthand for `bwedit edit <FILE>`
//! - Global `--quiet` flag for scripting-friendly output
//! - Folder arguments take a folder id, an exact folder name or `none`
//! - Type arguments take `login`, `note`, `card`, `identity` or a numeric code
//!
//! # Examples
//!
//! ```no_run
//! use bwedit::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::List { file, .. } => println!("listing {}", file.display()),
//!     _ => {}
//! }
//! ```

use crate::export::{Document, ItemType};
use crate::filter::{FilterQuery, FolderSelector, TypeSelector};
use crate::session::MoveTarget;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Folder argument value meaning "no folder"
pub const NO_FOLDER_ARG: &str = "none";

/// Output format for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// Aligned, colored columns
    #[default]
    Table,
    /// One CSV record per item
    Csv,
    /// The raw item objects as a JSON array
    Json,
}

/// Filter flags shared by the list and batch commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Match name, username or URL host (case-insensitive)
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only items in this folder (id, exact name, or `none`)
    #[arg(short = 'f', long = "folder", value_name = "FOLDER")]
    pub folder: Option<String>,

    /// Only items of this type (login, note, card, identity, or a number)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<ItemType>,
}

impl FilterArgs {
    /// Build the filter query these flags describe
    ///
    /// # Errors
    ///
    /// Returns a message naming the folder when `--folder` matches no
    /// folder of `document`.
    pub fn to_query(&self, document: &Document) -> Result<FilterQuery, String> {
        let mut query = FilterQuery::new();
        if let Some(text) = &self.search {
            query = query.with_search(text.clone());
        }
        if let Some(folder) = &self.folder {
            let selector = match resolve_folder_arg(document, folder)? {
                MoveTarget::NoFolder => FolderSelector::NoFolder,
                MoveTarget::Folder(id) => FolderSelector::Folder(id),
            };
            query = query.with_folder(selector);
        }
        if let Some(kind) = self.kind {
            query = query.with_kind(TypeSelector::Only(kind));
        }
        Ok(query)
    }
}

/// Resolve a folder argument against the folders of `document`
///
/// `none` (any case) means no folder; anything else must be a folder id or
/// an exact folder name.
///
/// # Errors
///
/// Returns a message naming the argument when no folder matches.
pub fn resolve_folder_arg(document: &Document, arg: &str) -> Result<MoveTarget, String> {
    if arg.eq_ignore_ascii_case(NO_FOLDER_ARG) {
        return Ok(MoveTarget::NoFolder);
    }
    document
        .resolve_folder(arg)
        .map(|folder| MoveTarget::Folder(folder.id.clone()))
        .ok_or_else(|| format!("Unknown folder '{arg}'"))
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "bwedit")]
#[command(about = "Edit Bitwarden JSON exports", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Export file to open in the editor
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory modified exports are written to
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive editor (default)
    #[command(visible_alias = "e")]
    Edit {
        /// Export file to open; press `o` in the editor to open one later
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Directory modified exports are written to
        #[arg(short = 'o', long = "output", value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Print the items passing a filter
    #[command(visible_alias = "ls")]
    List {
        /// Export file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long = "format", value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },

    /// Delete every item passing a filter and export the result
    Delete {
        /// Export file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Do not ask for confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        /// Directory the modified export is written to
        #[arg(short = 'o', long = "output", value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Move every item passing a filter into a folder and export the result
    #[command(visible_alias = "mv")]
    Move {
        /// Export file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Destination folder (id, exact name, or `none`); asked when omitted
        #[arg(long = "to", value_name = "FOLDER")]
        to: Option<String>,

        /// Directory the modified export is written to
        #[arg(short = 'o', long = "output", value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Rename one item and optionally move it to another folder
    Rename {
        /// Export file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Id of the item to edit
        #[arg(value_name = "ID")]
        id: String,

        /// New name; asked when omitted
        #[arg(short = 'n', long = "name", value_name = "NAME")]
        name: Option<String>,

        /// New folder (id, exact name, or `none`); unchanged when omitted
        #[arg(short = 'f', long = "folder", value_name = "FOLDER")]
        folder: Option<String>,

        /// Directory the modified export is written to
        #[arg(short = 'o', long = "output", value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Whether this command takes over the terminal
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Edit if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Edit {
            file: self.file.clone(),
            output: self.output.clone(),
        })
    }
}
