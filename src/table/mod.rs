mod output_table;
mod term_source;

pub use output_table::*;
pub use term_source::*;
