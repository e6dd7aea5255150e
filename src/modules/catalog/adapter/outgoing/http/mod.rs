mod page_fetcher_reqwest;
mod summary_generator_openai;

pub use page_fetcher_reqwest::ReqwestPageFetcher;
pub use summary_generator_openai::OpenAiSummaryGenerator;
