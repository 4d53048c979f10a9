// Builds the flat token string the parser consumes.
//
// A token file holds one token per line; only the first character of each
// non-empty line is kept. Inline expressions only need whitespace removed.

use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{RdError, RdResult};

pub fn assemble_tokens(text: &str) -> String {
    text.split('\n')
        .filter_map(|line| line.chars().next())
        .filter(|&ch| ch != '\r')
        .collect()
}

/// Read a token file and assemble its tokens.
pub fn read(path: &Path) -> RdResult<String> {
    let contents = fs::read_to_string(path).map_err(|source| RdError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(assemble_tokens(&contents))
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

pub fn normalize_inline(expr: &str) -> String {
    WHITESPACE.replace_all(expr, "").into_owned()
}
