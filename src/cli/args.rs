use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "sangay")]
#[command(about = "A calm terminal companion: moods, journal, breathing and focus timers")]
#[command(long_about = "sangay - mindfulness in the terminal

Log how you feel, keep a short journal, chat with a gentle companion and
run focus or breathing sessions with a live countdown.

QUICK START:
  sangay mood log calm            Record a mood
  sangay journal add \"Long day\"   Write a journal entry
  sangay breathe                  Guided 4-4-4 breathing
  sangay focus                    25/5 focus timer

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  sangay <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record moods and look back at them
    ///
    /// Moods: happy, calm, neutral, sad, anxious, angry, tired, grateful.
    ///
    /// # Examples
    ///
    ///   sangay mood log calm --note "after a walk"
    ///   sangay mood history
    ///   sangay mood stats --days 30
    #[command(alias = "m")]
    Mood(MoodArgs),

    /// Write and read journal entries
    ///
    /// Each entry gets a short reflection prompt based on what you wrote.
    #[command(alias = "j")]
    Journal(JournalArgs),

    /// Talk to the companion
    ///
    /// With a message, prints a single reply. Without one, reads lines from
    /// standard input until EOF or "exit".
    Chat {
        /// Message to send
        message: Option<String>,
    },

    /// Run a work/break focus timer
    ///
    /// Opens a live countdown. Keys: space/s start or pause, r reset,
    /// q/Esc quit. The finished session is saved to history.
    ///
    /// # Examples
    ///
    ///   sangay focus
    ///   sangay focus --work 50m --break 10m
    ///   sangay focus --headless --cycles 4
    Focus(FocusArgs),

    /// Run a guided inhale/hold/exhale breathing exercise
    ///
    /// # Examples
    ///
    ///   sangay breathe
    ///   sangay breathe --inhale 4 --hold 7 --exhale 8
    ///   sangay breathe --headless --cycles 3
    Breathe(BreatheArgs),

    /// Show or clear focus and breathing session history
    Sessions(SessionsArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: sangay completions bash > ~/.bash_completion.d/sangay
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for mood tracking.
#[derive(Args)]
pub struct MoodArgs {
    #[command(subcommand)]
    pub command: MoodCommands,
}

/// Mood subcommands.
#[derive(Subcommand)]
pub enum MoodCommands {
    /// Record how you feel right now
    Log {
        /// The mood (name or emoji)
        mood: String,

        /// Optional note
        #[arg(long, short = 'n')]
        note: Option<String>,
    },

    /// Show recently recorded moods
    History {
        /// Number of entries to show (default from config: 5)
        #[arg(long, short = 'l')]
        limit: Option<usize>,
    },

    /// Count moods over recent days
    Stats {
        /// Window in days (default from config: 7)
        #[arg(long, short = 'd')]
        days: Option<i64>,
    },
}

/// Arguments for the journal.
#[derive(Args)]
pub struct JournalArgs {
    #[command(subcommand)]
    pub command: JournalCommands,
}

/// Journal subcommands.
#[derive(Subcommand)]
pub enum JournalCommands {
    /// Write a new entry
    Add {
        /// Entry text
        text: String,
    },

    /// Show recent entries
    List {
        /// Number of entries to show (default from config: 10)
        #[arg(long, short = 'l')]
        limit: Option<usize>,
    },
}

/// Arguments for the focus timer.
#[derive(Args)]
pub struct FocusArgs {
    /// Work phase length (e.g. 25m, 1h, 90s; a bare number is minutes)
    #[arg(long, short = 'w')]
    pub work: Option<String>,

    /// Break phase length
    #[arg(long = "break", short = 'b')]
    pub rest: Option<String>,

    /// Print notifications instead of opening the live screen
    #[arg(long)]
    pub headless: bool,

    /// Stop after this many work/break rounds (headless only)
    #[arg(long, short = 'c', requires = "headless")]
    pub cycles: Option<u32>,
}

/// Arguments for the breathing exercise.
#[derive(Args)]
pub struct BreatheArgs {
    /// Inhale length in seconds
    #[arg(long)]
    pub inhale: Option<i64>,

    /// Hold length in seconds
    #[arg(long)]
    pub hold: Option<i64>,

    /// Exhale length in seconds
    #[arg(long)]
    pub exhale: Option<i64>,

    /// Count each finished exhale as a completed cycle
    #[arg(long)]
    pub count_cycles: bool,

    /// Print cues instead of opening the live screen
    #[arg(long)]
    pub headless: bool,

    /// Stop after this many breaths (headless only)
    #[arg(long, short = 'c', requires = "headless")]
    pub cycles: Option<u32>,
}

/// Arguments for session history.
#[derive(Args)]
pub struct SessionsArgs {
    #[command(subcommand)]
    pub command: SessionsCommands,
}

/// Session history subcommands.
#[derive(Subcommand)]
pub enum SessionsCommands {
    /// Show recent sessions
    History {
        /// Number of sessions to show
        #[arg(long, short = 'l', default_value = "10")]
        limit: usize,
    },

    /// Show all-time totals
    Summary,

    /// Delete all session history
    Clear {
        /// Confirm deletion
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Arguments for configuration.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

impl Commands {
    /// Whether this command takes over the terminal with the live screen.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        match self {
            Self::Focus(args) => !args.headless,
            Self::Breathe(args) => !args.headless,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verifies() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::try_parse_from(["sangay", "sessions", "summary"]).unwrap();
        assert!(matches!(cli.output, OutputFormat::Pretty));
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["sangay", "--output", "json", "mood", "history"]).unwrap();
        assert!(matches!(cli.output, OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_short() {
        let cli = Cli::try_parse_from(["sangay", "mood", "history", "-o", "json"]).unwrap();
        assert!(matches!(cli.output, OutputFormat::Json));
    }

    #[test]
    fn test_mood_log() {
        let cli = Cli::try_parse_from(["sangay", "mood", "log", "calm", "--note", "tea"]).unwrap();
        if let Commands::Mood(args) = cli.command {
            if let MoodCommands::Log { mood, note } = args.command {
                assert_eq!(mood, "calm");
                assert_eq!(note.as_deref(), Some("tea"));
            } else {
                panic!("Expected Log subcommand");
            }
        } else {
            panic!("Expected Mood command");
        }
    }

    #[test]
    fn test_mood_alias() {
        let cli = Cli::try_parse_from(["sangay", "m", "stats", "-d", "30"]).unwrap();
        if let Commands::Mood(args) = cli.command {
            assert!(matches!(args.command, MoodCommands::Stats { days: Some(30) }));
        } else {
            panic!("Expected Mood command");
        }
    }

    #[test]
    fn test_journal_add() {
        let cli = Cli::try_parse_from(["sangay", "journal", "add", "a quiet morning"]).unwrap();
        if let Commands::Journal(args) = cli.command {
            assert!(matches!(args.command, JournalCommands::Add { ref text } if text == "a quiet morning"));
        } else {
            panic!("Expected Journal command");
        }
    }

    #[test]
    fn test_focus_durations() {
        let cli =
            Cli::try_parse_from(["sangay", "focus", "--work", "50m", "--break", "10m"]).unwrap();
        if let Commands::Focus(args) = cli.command {
            assert_eq!(args.work.as_deref(), Some("50m"));
            assert_eq!(args.rest.as_deref(), Some("10m"));
            assert!(!args.headless);
        } else {
            panic!("Expected Focus command");
        }
    }

    #[test]
    fn test_cycles_requires_headless() {
        assert!(Cli::try_parse_from(["sangay", "focus", "--cycles", "2"]).is_err());
        assert!(Cli::try_parse_from(["sangay", "breathe", "--headless", "--cycles", "2"]).is_ok());
    }

    #[test]
    fn test_breathe_args() {
        let cli = Cli::try_parse_from([
            "sangay", "breathe", "--inhale", "4", "--hold", "7", "--exhale", "8", "--count-cycles",
        ])
        .unwrap();
        if let Commands::Breathe(args) = cli.command {
            assert_eq!(args.inhale, Some(4));
            assert_eq!(args.hold, Some(7));
            assert_eq!(args.exhale, Some(8));
            assert!(args.count_cycles);
        } else {
            panic!("Expected Breathe command");
        }
    }

    #[test]
    fn test_is_interactive() {
        let cli = Cli::try_parse_from(["sangay", "breathe"]).unwrap();
        assert!(cli.command.is_interactive());

        let cli = Cli::try_parse_from(["sangay", "focus", "--headless"]).unwrap();
        assert!(!cli.command.is_interactive());

        let cli = Cli::try_parse_from(["sangay", "chat", "hi"]).unwrap();
        assert!(!cli.command.is_interactive());
    }

    #[test]
    fn test_sessions_clear() {
        let cli = Cli::try_parse_from(["sangay", "sessions", "clear", "--force"]).unwrap();
        if let Commands::Sessions(args) = cli.command {
            assert!(matches!(args.command, SessionsCommands::Clear { force: true }));
        } else {
            panic!("Expected Sessions command");
        }
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::try_parse_from(["sangay", "completions", "zsh"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Zsh }));
        assert!(Cli::try_parse_from(["sangay", "completions", "tcsh"]).is_err());
    }
}
