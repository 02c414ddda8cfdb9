//! Book identity resolution and search ranking for a picture-book lending
//! administration app.
//!
//! The UI, persistence, and network layers live elsewhere; this crate owns
//! the algorithmic core: ISBN validation, Japanese bibliographic text
//! normalization, kana shelf grouping, management-number sort keys, and
//! relevance scoring/ranking of catalog search candidates.

pub mod modules;
pub mod shared;
