pub mod book_query;
pub mod isbn;
pub mod kana_group;
pub mod management_number;

pub use book_query::BookQuery;
pub use isbn::{Isbn, IsbnVariant};
pub use kana_group::KanaGroup;
pub use management_number::ManagementSortKey;
