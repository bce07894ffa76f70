//! Content API data models
//!
//! Raw API shapes and the domain records built from them.

mod actor;
mod post;
mod tag;

pub use actor::{ACTOR_PLACEHOLDER_IMAGE, ActorSummary};
pub use post::{POST_PLACEHOLDER_IMAGE, PostDetail, PostSummary, RawPost};
pub use tag::TagSummary;
