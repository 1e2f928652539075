pub mod document;
pub mod page_fetcher;
pub mod product_matcher;
pub mod product_search;
pub mod sub_link_crawler;

pub use document::*;
pub use page_fetcher::*;
pub use product_matcher::*;
pub use product_search::*;
pub use sub_link_crawler::*;
