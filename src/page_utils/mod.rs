mod page_fetching;
mod page_parser;
mod result_filter;
mod url_data_proc;
use crate::CResult;

pub use page_fetching::*;
pub use page_parser::*;
pub use result_filter::*;
pub use url_data_proc::*;
