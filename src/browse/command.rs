//! Commands accepted by the interactive browse session

use std::str::FromStr;

use thiserror::Error;

/// One line of browse input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Debounced free-text search
    Search(String),
    Next,
    Prev,
    /// Jump to a page of the active list
    Page(u32),
    Tags(u32),
    Actors(u32),
    Tag(u64),
    Actor(u64),
    Show(u64),
    /// Sweep expired cache entries and print cache stats
    Sweep,
    Help,
    Quit,
}

/// Why a browse line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseCommandError(String);

pub const HELP: &str = "\
Commands:
  search <term>   search posts (fires after typing pauses)
  next | prev     move through the current list
  page <n>        jump to page n of the current list
  tags [n]        list tags
  actors [n]      list actors
  tag <id>        posts with a tag
  actor <id>      posts featuring an actor
  show <id>       post detail with media URLs
  sweep           drop expired cache entries
  quit";

impl FromStr for BrowseCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
            "next" | "n" => Ok(BrowseCommand::Next),
            "prev" | "p" => Ok(BrowseCommand::Prev),
            "page" => parse_page(verb, rest).map(BrowseCommand::Page),
            "tags" => optional_page(verb, rest).map(BrowseCommand::Tags),
            "actors" => optional_page(verb, rest).map(BrowseCommand::Actors),
            "tag" => parse_number(verb, rest).map(BrowseCommand::Tag),
            "actor" => parse_number(verb, rest).map(BrowseCommand::Actor),
            "show" => parse_number(verb, rest).map(BrowseCommand::Show),
            "sweep" => Ok(BrowseCommand::Sweep),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            "" => Err(ParseCommandError("empty command".to_string())),
            other => Err(ParseCommandError(format!(
                "unknown command '{}', type 'help' for a list",
                other
            ))),
        }
    }
}

fn parse_number<N: FromStr>(verb: &str, arg: &str) -> Result<N, ParseCommandError> {
    arg.parse()
        .map_err(|_| ParseCommandError(format!("'{}' expects a number, got '{}'", verb, arg)))
}

/// Pages are numbered from 1
fn parse_page(verb: &str, arg: &str) -> Result<u32, ParseCommandError> {
    match parse_number(verb, arg)? {
        0 => Err(ParseCommandError(format!("'{}' pages start at 1", verb))),
        page => Ok(page),
    }
}

fn optional_page(verb: &str, arg: &str) -> Result<u32, ParseCommandError> {
    if arg.is_empty() {
        Ok(1)
    } else {
        parse_page(verb, arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_keeps_inner_spaces() {
        assert_eq!(
            "search  Don't Stop ".parse::<BrowseCommand>(),
            Ok(BrowseCommand::Search("Don't Stop".to_string()))
        );
        assert_eq!(
            "search".parse::<BrowseCommand>(),
            Ok(BrowseCommand::Search(String::new()))
        );
    }

    #[test]
    fn test_navigation_and_lists() {
        assert_eq!("next".parse::<BrowseCommand>(), Ok(BrowseCommand::Next));
        assert_eq!("P".parse::<BrowseCommand>(), Ok(BrowseCommand::Prev));
        assert_eq!("page 4".parse::<BrowseCommand>(), Ok(BrowseCommand::Page(4)));
        assert_eq!("tags".parse::<BrowseCommand>(), Ok(BrowseCommand::Tags(1)));
        assert_eq!("actors 3".parse::<BrowseCommand>(), Ok(BrowseCommand::Actors(3)));
        assert_eq!("show 42".parse::<BrowseCommand>(), Ok(BrowseCommand::Show(42)));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!("show".parse::<BrowseCommand>().is_err());
        assert!("tag abc".parse::<BrowseCommand>().is_err());
        assert!("dance".parse::<BrowseCommand>().is_err());
        assert!("".parse::<BrowseCommand>().is_err());
    }

    #[test]
    fn test_page_zero_is_rejected() {
        for line in ["page 0", "tags 0", "actors 0"] {
            let err = line.parse::<BrowseCommand>().unwrap_err();
            assert!(err.to_string().contains("start at 1"), "{}", err);
        }
    }
}
