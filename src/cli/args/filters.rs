//! Filter argument types for CLI commands

use clap::Args;

use crate::client::ListQuery;

/// Filters for the posts command.
///
/// Filters combine: `--search drama --tag 3` asks for posts matching both.
#[derive(Args, Debug, Default, Clone)]
pub struct PostFilterArgs {
    /// Free-text search term
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only posts carrying this tag id
    #[arg(long, short = 't')]
    pub tag: Option<u64>,

    /// Only posts featuring this actor id
    #[arg(long, short = 'a')]
    pub actor: Option<u64>,
}

impl PostFilterArgs {
    /// Convert CLI args to a list query. Blank search terms are ignored.
    pub fn to_query(&self) -> ListQuery {
        let mut query = ListQuery::new();
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            query = query.search(term);
        }
        if let Some(tag) = self.tag {
            query = query.tag(tag);
        }
        if let Some(actor) = self.actor {
            query = query.actor(actor);
        }
        query
    }
}
