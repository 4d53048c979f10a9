// Input source constants
pub mod source {
    // Token file read when no path is given on the command line
    pub const DEFAULT_TOKEN_FILE: &str = "lex_output.txt";
}

// Parser limits
pub mod parser {
    // Maximum number of simultaneously open parentheses
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

// Tree rendering
pub mod render {
    pub const INDENT_WIDTH: usize = 4;
    pub const AST_HEADER: &str = "Abstract Syntax Tree (AST):";
}
