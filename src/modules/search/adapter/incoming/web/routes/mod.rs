mod search;

pub use search::{search_handler, __path_search_handler, SearchParams};
