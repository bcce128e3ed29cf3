use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordtrie::WordList;

/// Insert words into a trie and look them up
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: built-in sample words)
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Report whether each word was inserted as a complete word
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// List words starting with prefix
    Prefix { prefix: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli, &mut io::stdout().lock())
}

/// Builds the trie from the chosen word list and writes the command's report
fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let words = match &cli.dict {
        Some(path) => WordList::load(path)?,
        None => WordList::sample(),
    };
    let trie = words.build_trie()?;

    match cli.command {
        Some(Commands::Lookup { words: queries }) => {
            for word in &queries {
                writeln!(out, "{word} : {}", u8::from(trie.lookup(word)))?;
            }
        }
        Some(Commands::Prefix { prefix }) => {
            for word in trie.words_starting_with(&prefix) {
                writeln!(out, "{word}")?;
            }
        }
        None => {
            for word in words.words() {
                writeln!(out, "\t{word} : {}", u8::from(trie.lookup(word)))?;
            }
        }
    }

    let released = trie.destroy();
    info!(released, "released trie nodes");
    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_defaults_to_demo() {
        let cli = Cli::try_parse_from(["wordtrie"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.dict.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_lookup_words() {
        let cli = Cli::try_parse_from(["wordtrie", "-vv", "lookup", "no", "not"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Lookup {
                words: vec!["no".to_string(), "not".to_string()]
            })
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_lookup_requires_a_word() {
        assert!(Cli::try_parse_from(["wordtrie", "lookup"]).is_err());
    }

    #[test]
    fn test_prefix_with_dictionary() {
        let cli =
            Cli::try_parse_from(["wordtrie", "prefix", "no", "--dict", "words.txt"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Prefix {
                prefix: "no".to_string()
            })
        );
        assert_eq!(cli.dict, Some(PathBuf::from("words.txt")));
    }

    #[test]
    fn test_help_and_version() {
        let err = Cli::try_parse_from(["wordtrie", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("Print help"));

        let err = Cli::try_parse_from(["wordtrie", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.to_string().contains("wordtrie 0.1.0"));
    }

    fn output_of(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out: Vec<u8> = Vec::new();
        run(cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_demo_reports_every_sample_word() {
        assert_eq!(
            output_of(&["wordtrie"]),
            "\tnotaword : 1\n\tucf : 1\n\tno : 1\n\tnote : 1\n\tcorg : 1\n\tjoey : 1\n"
        );
    }

    #[test]
    fn test_lookup_output() {
        assert_eq!(
            output_of(&["wordtrie", "lookup", "no", "not"]),
            "no : 1\nnot : 0\n"
        );
    }

    #[test]
    fn test_prefix_output_with_dictionary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"theme\nthe\n# skip\nthemes\ntrie\n").unwrap();
        let path = file.path().to_str().unwrap();

        assert_eq!(
            output_of(&["wordtrie", "--dict", path, "prefix", "the"]),
            "the\ntheme\nthemes\n"
        );
    }

    #[test]
    fn test_bad_dictionary_word_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fine\nNot\n").unwrap();
        let cli = Cli::try_parse_from(["wordtrie", "--dict", file.path().to_str().unwrap()]).unwrap();

        let err = run(cli, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.to_string(), "Bad word on line 2");
    }
}
