use super::app_config::{LogLevel, ThemeMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sahitya",
    version,
    about = "A terminal library of Hindi literature",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Initial theme mode.
    #[arg(long, value_enum)]
    pub theme_mode: Option<ThemeMode>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Seconds between riddle rotations.
    #[arg(long, value_name = "SECS")]
    pub rotation_interval: Option<u64>,

    /// Width in columns below which the compact layout is used.
    #[arg(long, value_name = "COLUMNS")]
    pub narrow_width: Option<u16>,
}
