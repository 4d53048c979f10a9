pub mod parser;

pub use parser::{parse, ParseOutcome, Parser, ParserConfig};
