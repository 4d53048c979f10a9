use clap::Parser as ClapParser;
use rdparse::{
    ast::{render_root, Node},
    config::{parser::DEFAULT_MAX_DEPTH, render::AST_HEADER, source::DEFAULT_TOKEN_FILE},
    errors::{RdError, RdResult},
    source::{normalize_inline, read},
    ParseOutcome, Parser, ParserConfig,
};
use std::{path::PathBuf, time::Instant};
use tracing::{debug, info, warn, Level};

#[derive(ClapParser)]
#[command(
    author,
    version,
    about = "Recursive-descent parser for integer arithmetic expressions",
    long_about = "Recursive-descent parser for integer arithmetic expressions.\n\
                 Reads single-character tokens (one per line, first character kept)\n\
                 and prints the abstract syntax tree.\n\
                 \n\
                 Example usage:\n\
                 rdparse                          # Parse lex_output.txt\n\
                 rdparse tokens.txt               # Parse another token file\n\
                 rdparse -e '(2+3)*4'             # Parse an inline expression\n\
                 rdparse -e '1+' --strict         # Fail on any diagnostic\n\
                 rdparse -e '8-3-2' --unparse     # Print the expression back out"
)]
struct Cli {
    // Token file, one token per line
    #[arg(default_value = DEFAULT_TOKEN_FILE)]
    path: PathBuf,

    // Inline expression; whitespace is ignored
    #[arg(short, long, conflicts_with = "path")]
    expr: Option<String>,

    // Treat any diagnostic as a failure
    #[arg(short, long)]
    strict: bool,

    // Parenthesis nesting limit
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    // Print the re-serialized expression after the tree
    #[arg(long)]
    unparse: bool,

    // Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_input(args: &Cli) -> RdResult<String> {
    match &args.expr {
        Some(expr) => Ok(normalize_inline(expr)),
        None => {
            debug!(path = %args.path.display(), "reading token file");
            read(&args.path)
        }
    }
}

fn report(outcome: &ParseOutcome) {
    for diagnostic in &outcome.diagnostics {
        warn!(position = diagnostic.position(), "{}", diagnostic);
        eprintln!("error: {}", diagnostic);
    }
}

fn print_tree(root: Option<&Node>, unparse: bool) {
    println!("{}", AST_HEADER);
    print!("{}", render_root(root));
    if unparse {
        if let Some(root) = root {
            println!("Expression: {}", root);
        }
    }
}

fn run(args: &Cli) -> RdResult<()> {
    let input = load_input(args)?;
    info!(tokens = input.chars().count(), "input assembled");

    let start = Instant::now();
    let config = ParserConfig {
        max_depth: args.max_depth,
    };
    let outcome = Parser::with_config(&input, config).parse();
    debug!(
        elapsed = start.elapsed().as_secs_f64(),
        nodes = outcome.root.as_ref().map_or(0, Node::node_count),
        depth = outcome.root.as_ref().map_or(0, Node::depth),
        "parsing completed"
    );

    report(&outcome);

    if args.strict {
        let root = outcome.into_strict()?;
        print_tree(Some(&root), args.unparse);
        return Ok(());
    }

    print_tree(outcome.root.as_ref(), args.unparse);
    match outcome.root {
        Some(_) => Ok(()),
        None => Err(RdError::EmptyTree),
    }
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        fatal(&e.to_string());
    }
}
