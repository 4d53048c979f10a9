pub mod ast;
pub mod config;
pub mod errors;
pub mod frontend;
pub mod source;

pub use ast::{Node, Operator};
pub use errors::{Diagnostic, IntegerFault, RdError, RdResult};
pub use frontend::{parse, ParseOutcome, Parser, ParserConfig};
pub use source::read;
