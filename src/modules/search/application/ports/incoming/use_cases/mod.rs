mod search;

pub use search::{SearchError, SearchUseCase};
