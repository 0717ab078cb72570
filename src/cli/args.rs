//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::clipboard::ImageSize;

/// Clipbridge - clipboard bridge and desktop utilities
#[derive(Parser, Debug)]
#[command(name = "clipbridge")]
#[command(version)]
#[command(about = "Clipboard bridge and desktop utilities for a chat UI")]
#[command(long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the clipboard text
    Get {
        /// Read the selection buffer instead
        #[arg(short = 's', long)]
        selection: bool,
    },
    /// Replace the clipboard with text
    ///
    /// On Linux this waits until another application takes the clipboard,
    /// so the text outlives the process.
    Set {
        /// Text to copy
        text: String,
        /// Write the selection buffer instead
        #[arg(short = 's', long)]
        selection: bool,
    },
    /// Report whether the clipboard holds an image
    HasImage,
    /// Write the clipboard image as PNG
    Image {
        /// Output file (stdout if omitted)
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Scale to fit inside this box, keeping aspect ratio
        #[arg(long, value_name = "WxH")]
        size: Option<ImageSize>,
    },
    /// Print clipboard change events until interrupted
    Watch {
        /// Emit one JSON object per line
        #[arg(long)]
        json: bool,
        /// Polling interval in milliseconds
        #[arg(long, value_name = "MS")]
        interval: Option<u64>,
    },
    /// Format a byte count (e.g., 1536 -> 1.50 KB)
    #[command(allow_negative_numbers = true)]
    Bytes {
        /// Number of bytes
        bytes: i64,
        /// Decimal places
        #[arg(short = 'p', long)]
        precision: Option<u32>,
    },
    /// Generate a random UUID
    Uuid,
    /// Convert an HSLuv color to hex
    #[command(allow_negative_numbers = true)]
    Hsluv {
        /// Hue in degrees
        hue: f64,
        /// Saturation, 0-100
        saturation: f64,
        /// Lightness, 0-100
        lightness: f64,
        /// Alpha, 0-1
        #[arg(short = 'a', long, default_value_t = 1.0)]
        alpha: f64,
    },
    /// Print milliseconds since the last user input
    Idle,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "poll_interval_ms",
    "byte_precision",
    "log_level",
    "linux.selection",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_get_selection() {
        let cli = Cli::parse_from(["clipbridge", "get", "--selection"]);
        assert!(matches!(cli.command, Commands::Get { selection: true }));
    }

    #[test]
    fn parses_set_text() {
        let cli = Cli::parse_from(["clipbridge", "set", "hello world"]);
        match cli.command {
            Commands::Set { text, selection } => {
                assert_eq!(text, "hello world");
                assert!(!selection);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_image_size() {
        let cli = Cli::parse_from(["clipbridge", "image", "--size", "100x50", "-o", "out.png"]);
        match cli.command {
            Commands::Image { output, size } => {
                assert_eq!(size, Some(ImageSize::new(100, 50)));
                assert_eq!(output, Some(PathBuf::from("out.png")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_image_size() {
        assert!(Cli::try_parse_from(["clipbridge", "image", "--size", "big"]).is_err());
    }

    #[test]
    fn parses_negative_bytes() {
        let cli = Cli::parse_from(["clipbridge", "bytes", "-2048", "-p", "1"]);
        assert!(matches!(
            cli.command,
            Commands::Bytes {
                bytes: -2048,
                precision: Some(1)
            }
        ));
    }

    #[test]
    fn parses_hsluv_with_default_alpha() {
        let cli = Cli::parse_from(["clipbridge", "hsluv", "-30", "50", "60"]);
        match cli.command {
            Commands::Hsluv {
                hue,
                saturation,
                lightness,
                alpha,
            } => {
                assert_eq!(hue, -30.0);
                assert_eq!(saturation, 50.0);
                assert_eq!(lightness, 60.0);
                assert_eq!(alpha, 1.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["clipbridge", "uuid", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["clipbridge"]).is_err());
    }

    #[test]
    fn config_keys() {
        assert!(is_valid_config_key("linux.selection"));
        assert!(!is_valid_config_key("api_key"));
    }
}
