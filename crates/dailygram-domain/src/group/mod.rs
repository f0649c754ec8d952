mod aggregate;
mod author;
mod member;
mod post;
mod repository;

pub use aggregate::Group;
pub use author::{AuthorKey, AuthorResolver, NAME_ID_PREFIX, UNKNOWN_AUTHOR_ID};
pub use member::Member;
pub use post::{AuthorRef, Post};
pub use repository::GroupRepository;
