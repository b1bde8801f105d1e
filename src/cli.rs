use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sygil")]
#[command(version, about = "Generate Sygil word sets from wordpacks")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Directory of *.txt wordpacks to load")]
    pub wordpacks: Option<PathBuf>,
    #[arg(long, global = true, help = "JSON file of extra presets")]
    pub presets: Option<PathBuf>,
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw words for every player in a request
    Generate(GenerateArgs),
    /// Inspect wordpacks
    #[command(subcommand)]
    Wordpacks(WordpackCommand),
    /// Inspect presets
    #[command(subcommand)]
    Presets(PresetCommand),
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[arg(long, conflicts_with = "preset", help = "Generation request JSON file")]
    pub request: Option<PathBuf>,
    #[arg(long, help = "Preset name (defaults to the configured default preset)")]
    pub preset: Option<String>,
    #[arg(long, help = "Fixed RNG seed")]
    pub seed: Option<u64>,
    #[arg(long, help = "Sort each player's words")]
    pub alphabetize: bool,
    #[arg(long, help = "One word per line instead of a comma-separated line")]
    pub list: bool,
    #[arg(long, help = "Nest words under their wordpack")]
    pub group_by_wordpack: bool,
    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum WordpackCommand {
    /// List wordpack names
    List {
        #[arg(long, help = "Hide '+' extended variants")]
        base_only: bool,
    },
    /// Print the words of one wordpack
    Show { name: String },
}

#[derive(Subcommand, Debug)]
pub enum PresetCommand {
    /// List preset names
    List,
    /// Print a preset as JSON
    Show { name: String },
}
