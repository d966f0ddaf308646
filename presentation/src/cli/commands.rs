//! CLI command definitions

use clap::{Parser, Subcommand};
use miniperplx_domain::{SearchGroupId, VoiceId};
use std::path::PathBuf;

/// CLI arguments for miniperplx
#[derive(Parser, Debug)]
#[command(name = "miniperplx")]
#[command(author, version, about = "MiniPerplx server actions from the command line")]
#[command(long_about = r#"
Runs the MiniPerplx server actions locally:

1. suggest       Three follow-up questions for a conversation (Gemini)
2. speech        Text-to-speech as an MP3 data URI (ElevenLabs)
3. metadata      Title and description of a webpage
4. group-config  Tools and system prompt for a search group

Results are printed to stdout as JSON. Logs go to stderr.

Configuration files are loaded from (in priority order):
1. MINIPERPLX_<SECTION>__<KEY>                  Environment
2. --config <path>                              Explicit config file
3. ./miniperplx.toml                            Project-level config
4. ~/.config/miniperplx/config.toml             Global config

Example:
  echo '[{"role":"user","content":"What is Rust?"}]' | miniperplx suggest
  miniperplx speech "Hello there" --voice nova --out hello.mp3
  miniperplx metadata https://www.rust-lang.org
  miniperplx group-config academic
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Suggest three follow-up questions for a conversation
    Suggest {
        /// JSON file holding the message history (reads stdin when omitted)
        #[arg(long, value_name = "FILE")]
        history: Option<PathBuf>,
    },

    /// Synthesize speech and print it as an MP3 data URI
    Speech {
        /// Text to speak
        text: String,

        /// Voice to use
        #[arg(long, default_value_t = VoiceId::default())]
        voice: VoiceId,

        /// Also write the decoded MP3 to this file
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Fetch a webpage's title and description
    Metadata {
        /// Page URL
        url: String,
    },

    /// Show the tools and system prompt for a search group
    GroupConfig {
        /// Search group (web, academic, shopping, youtube, x, writing)
        #[arg(default_value_t = SearchGroupId::default())]
        group: SearchGroupId,
    },

    /// List every tool and the groups that allow it
    Tools,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_defaults_to_alloy() {
        let cli = Cli::try_parse_from(["miniperplx", "speech", "Hello"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Speech {
                text: "Hello".to_string(),
                voice: VoiceId::Alloy,
                out: None,
            })
        );
    }

    #[test]
    fn test_speech_voice_and_out() {
        let cli = Cli::try_parse_from([
            "miniperplx", "speech", "Hi", "--voice", "nova", "--out", "hi.mp3",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Speech {
                text: "Hi".to_string(),
                voice: VoiceId::Nova,
                out: Some(PathBuf::from("hi.mp3")),
            })
        );
    }

    #[test]
    fn test_unknown_voice_rejected() {
        assert!(Cli::try_parse_from(["miniperplx", "speech", "Hi", "--voice", "george"]).is_err());
    }

    #[test]
    fn test_group_config_default_and_explicit() {
        let cli = Cli::try_parse_from(["miniperplx", "group-config"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::GroupConfig {
                group: SearchGroupId::Web
            })
        );

        let cli = Cli::try_parse_from(["miniperplx", "group-config", "academic"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::GroupConfig {
                group: SearchGroupId::Academic
            })
        );
    }

    #[test]
    fn test_unknown_group_rejected() {
        assert!(Cli::try_parse_from(["miniperplx", "group-config", "news"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["miniperplx", "metadata", "https://example.com", "-vv", "-q"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["miniperplx", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
