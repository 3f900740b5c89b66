use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "humanfmt")]
#[command(about = "Format numbers and byte counts for human eyes")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Format a cardinal count ("1.50 thousand")
    Count(ValueArgs),
    /// Format a byte size ("1.50 kilobyte")
    Size(ValueArgs),
    /// Format value/total as a percentage
    Percent(RatioArgs),
    /// Format bytes/seconds as a transfer rate
    Rate(RatioArgs),
    /// Classify a file as text or binary
    Sniff(SniffArgs),
}

#[derive(clap::Args)]
pub struct ValueArgs {
    /// Value to format
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

#[derive(clap::Args)]
pub struct RatioArgs {
    /// Numerator
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Denominator (0 yields a zero ratio)
    #[arg(allow_negative_numbers = true)]
    pub total: f64,
}

#[derive(clap::Args)]
pub struct SniffArgs {
    /// File to classify
    pub path: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
