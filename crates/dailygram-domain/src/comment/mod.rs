mod thread;

pub use thread::{Comment, CommentThread};
