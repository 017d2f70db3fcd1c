mod list_feed_kind;
mod list_paginator;
mod list_query;

pub use list_feed_kind::ListFeedKind;
pub use list_paginator::{ListPaginator, PageSource};
pub use list_query::{ListColumn, ListOrder, ListQuery, ListSearch};
