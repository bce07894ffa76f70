//! Pagination argument types for CLI commands

use clap::Args;

/// Shared page selection for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// Tags {
///     #[command(flatten)]
///     pagination: PageArgs,
/// }
/// ```
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page number (1-indexed)
    #[arg(
        long,
        short = 'p',
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self { page: 1 }
    }
}
