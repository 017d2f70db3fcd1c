mod corridor_filter;
mod relevance_filter;

pub use corridor_filter::{filter_in_corridor, in_corridor, Located};
pub use relevance_filter::RouteRelevanceFilter;
