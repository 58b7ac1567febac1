//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gamelist_lib::HideCriteria;

#[derive(Parser)]
#[command(name = "gamelist")]
#[command(about = "Maintain EmulationStation gamelist.xml catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Remove games whose ROM file no longer exists (keeps a .bak copy)
    Validate {
        /// Path to the gamelist.xml file
        #[arg(short, long)]
        gamelist: PathBuf,
    },

    /// Hide games released outside the allowed regions
    HideRegions {
        /// Path to the gamelist.xml file
        #[arg(short, long)]
        gamelist: PathBuf,

        /// Region codes to keep visible (default: en eu us wr)
        #[arg(short, long, num_args = 1.., value_delimiter = ',')]
        allow_regions: Option<Vec<String>>,
    },

    /// Hide games matching any of the given criteria
    Hide {
        /// Path to the gamelist.xml file
        #[arg(short, long)]
        gamelist: PathBuf,

        #[command(flatten)]
        criteria: HideArgs,
    },

    /// Report duplicate games, or pick which copy to keep
    Dups(DupsArgs),

    /// Show the settings file path and the values in effect
    Settings,
}

/// Predicates for the `hide` command. Any number can be combined.
#[derive(Args, Clone, Default)]
pub(crate) struct HideArgs {
    /// Hide games whose title contains this text
    #[arg(long)]
    pub hide_title: Option<String>,

    /// Hide games with an empty description
    #[arg(long)]
    pub hide_empty_desc: bool,

    /// Hide games rated below this value (0 to 1)
    #[arg(long)]
    pub hide_rating: Option<f32>,

    /// Hide games without an image
    #[arg(long)]
    pub hide_no_image: bool,

    /// Hide games whose genre contains this text
    #[arg(long)]
    pub hide_genre: Option<String>,
}

impl From<HideArgs> for HideCriteria {
    fn from(args: HideArgs) -> Self {
        Self {
            title: args.hide_title,
            empty_desc: args.hide_empty_desc,
            rating_below: args.hide_rating,
            no_image: args.hide_no_image,
            genre: args.hide_genre,
        }
    }
}

#[derive(Args, Clone, Default)]
pub(crate) struct DupsArgs {
    /// Path to the gamelist.xml file (default: ./gamelist.xml)
    #[arg(short, long)]
    pub gamelist: Option<PathBuf>,

    /// Choose which duplicate to keep, group by group
    #[arg(short, long)]
    pub interactive: bool,

    /// With --interactive, skip groups where exactly one game is visible
    #[arg(short, long)]
    pub skip: bool,

    /// With --interactive, start at the first group whose title contains this text
    #[arg(long)]
    pub start_at: Option<String>,

    /// Unhide every game and exit
    #[arg(long)]
    pub unhide_all: bool,
}
