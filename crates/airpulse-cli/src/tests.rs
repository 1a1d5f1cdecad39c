use std::path::Path;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["airpulse"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_run_defaults() {
    let cli = Cli::try_parse_from(["airpulse", "run"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Run {
            query: None,
            max_mentions: None,
            max_comments: None,
            output: None,
        })
    ));
}

#[test]
fn parses_run_with_overrides() {
    let cli = Cli::try_parse_from([
        "airpulse",
        "run",
        "--query",
        "@bahrainairport -is:retweet",
        "--max-mentions",
        "25",
        "--max-comments",
        "12",
        "--output",
        "out/results.csv",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Run {
            query,
            max_mentions,
            max_comments,
            output,
        }) => {
            assert_eq!(query.as_deref(), Some("@bahrainairport -is:retweet"));
            assert_eq!(max_mentions, Some(25));
            assert_eq!(max_comments, Some(12));
            assert_eq!(output.as_deref(), Some(Path::new("out/results.csv")));
        }
        other => panic!("expected run command, got {other:?}"),
    }
}

#[test]
fn rejects_non_numeric_max_mentions() {
    let result = Cli::try_parse_from(["airpulse", "run", "--max-mentions", "many"]);
    assert!(result.is_err());
}

#[test]
fn parses_classify_text() {
    let cli = Cli::try_parse_from(["airpulse", "classify", "Lovely lounge"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Classify { ref text }) if text == "Lovely lounge"
    ));
}

#[test]
fn classify_requires_text() {
    assert!(Cli::try_parse_from(["airpulse", "classify"]).is_err());
}
