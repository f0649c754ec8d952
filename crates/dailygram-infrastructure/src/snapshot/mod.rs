mod loader;
mod types;

pub use loader::SnapshotLoader;
pub use types::{
    CommentSnapshot, GroupSnapshot, MemberSnapshot, PostSnapshot, RawId, SnapshotDocument,
};
