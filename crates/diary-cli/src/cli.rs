use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use diary_core::VERSION;

/// Diary - a calendar-based personal diary with tags and yearly stats
#[derive(Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "DIARY_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the config file and create an empty store
    Init(InitArgs),

    /// Add a new entry
    Add(AddArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// List entries written on a date
    Day(DayArgs),

    /// List entries from the same month and day in every year
    OnThisDay(OnThisDayArgs),

    /// Find entries by tag
    Search(SearchArgs),

    /// List every tag in use
    Tags(OutputArgs),

    /// Show statistics for a year
    Stats(StatsArgs),

    /// Show a month calendar with days that have entries
    Calendar(CalendarArgs),

    /// Show the week containing a date
    Week(WeekArgs),

    /// Show whether ads were removed
    Paid(OutputArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Output flags shared by listing commands
#[derive(Args, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where the store file should live
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Characters shown in entry previews
    #[arg(long)]
    pub preview_chars: Option<usize>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry text
    #[arg(long)]
    pub text: String,

    /// Date of the entry (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,

    /// Tag the entry (up to three)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Attach an image reference (up to ten)
    #[arg(short, long, value_name = "URI")]
    pub image: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Replace the entry text
    #[arg(long)]
    pub text: Option<String>,

    /// Add a tag
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Remove all tags before adding new ones
    #[arg(long)]
    pub clear_tags: bool,

    /// Attach an image reference
    #[arg(short, long, value_name = "URI")]
    pub image: Vec<String>,

    /// Remove all images before attaching new ones
    #[arg(long)]
    pub clear_images: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `day` command
#[derive(Args)]
pub struct DayArgs {
    /// Date (YYYY-MM-DD, default today)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `on-this-day` command
#[derive(Args)]
pub struct OnThisDayArgs {
    /// Month (1-12, default this month)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Day of month (1-31, default today)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day: Option<u32>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Tag to search for (case-insensitive)
    #[arg(value_name = "TAG")]
    pub tag: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Year (default this year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Include pie chart slice paths
    #[arg(long)]
    pub pie: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `calendar` command
#[derive(Args)]
pub struct CalendarArgs {
    /// Year (default this year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month (1-12, default this month)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `week` command
#[derive(Args)]
pub struct WeekArgs {
    /// Any date in the week (YYYY-MM-DD, default today)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}
