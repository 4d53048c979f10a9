use tracing::{debug, trace};

use crate::ast::{Node, Operator};
use crate::config::parser::DEFAULT_MAX_DEPTH;
use crate::errors::{Diagnostic, IntegerFault, RdError, RdResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Result of one parse: the tree (if any) plus everything that went wrong on
/// the way, in the order it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub root: Option<Node>,
    pub diagnostics: Vec<Diagnostic>,
    pub consumed: usize,
}

impl ParseOutcome {
    /// A tree was built and nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.root.is_some() && self.diagnostics.is_empty()
    }

    /// Treat the first diagnostic as a hard failure.
    pub fn into_strict(self) -> RdResult<Node> {
        if let Some(first) = self.diagnostics.into_iter().next() {
            return Err(RdError::Diagnostic(first));
        }
        self.root.ok_or(RdError::EmptyTree)
    }
}

pub struct Parser {
    input: Vec<char>,
    index: usize,
    depth: usize,
    config: ParserConfig,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &str, config: ParserConfig) -> Self {
        Self {
            input: input.chars().collect(),
            index: 0,
            depth: 0,
            config,
            diagnostics: Vec::new(),
        }
    }

    /// Parse the whole input as one expression. Anything left over is
    /// reported but does not discard the tree built so far.
    pub fn parse(mut self) -> ParseOutcome {
        debug!(length = self.input.len(), "parsing expression");
        let root = self.parse_expression();
        if self.index != self.input.len() {
            let remaining: String = self.input[self.index..].iter().collect();
            self.report(Diagnostic::TrailingInput {
                position: self.index,
                remaining,
            });
        }
        debug!(
            consumed = self.index,
            diagnostics = self.diagnostics.len(),
            has_root = root.is_some(),
            "parse finished"
        );
        ParseOutcome {
            root,
            diagnostics: self.diagnostics,
            consumed: self.index,
        }
    }

    /**
     * Parse an expression according to the grammar:
     * expression = term { ( "+" | "-" ) term }
     */
    pub fn parse_expression(&mut self) -> Option<Node> {
        let mut lhs = self.parse_term();
        while let Some(operator) = self.match_operator(&[Operator::Add, Operator::Minus]) {
            let rhs = self.parse_term();
            lhs = fold(operator, lhs, rhs);
        }
        lhs
    }

    /**
     * Parse a term according to the grammar:
     * term = factor { ( "*" | "/" ) factor }
     */
    pub fn parse_term(&mut self) -> Option<Node> {
        let mut lhs = self.parse_factor();
        while let Some(operator) = self.match_operator(&[Operator::Multiply, Operator::Divide]) {
            let rhs = self.parse_factor();
            lhs = fold(operator, lhs, rhs);
        }
        lhs
    }

    /**
     * Parse a factor according to the grammar:
     * factor = "(" expression ")" | integer
     */
    pub fn parse_factor(&mut self) -> Option<Node> {
        let open = self.index;
        if self.match_char('(') {
            if self.depth >= self.config.max_depth {
                self.report(Diagnostic::NestingTooDeep {
                    position: open,
                    limit: self.config.max_depth,
                });
                return None;
            }
            self.depth += 1;
            let expr = self.parse_expression();
            self.depth -= 1;
            if !self.match_char(')') {
                self.report(Diagnostic::UnmatchedParenthesis {
                    position: self.index,
                });
            }
            return expr;
        }

        match self.parse_integer() {
            Ok(value) => Some(Node::literal(value)),
            Err(Diagnostic::InvalidInteger {
                reason: IntegerFault::NoLeadingDigit,
                ..
            }) => {
                self.report(Diagnostic::invalid_character(self.peek(), self.index));
                None
            }
            Err(diagnostic) => {
                self.report(diagnostic);
                None
            }
        }
    }

    /// integer = digit { digit }
    ///
    /// Fails without consuming anything when there is no leading digit. A
    /// run too long for `i64` is consumed and then rejected.
    pub fn parse_integer(&mut self) -> Result<i64, Diagnostic> {
        let start = self.index;
        if !self.parse_digit() {
            return Err(Diagnostic::invalid_integer(start, IntegerFault::NoLeadingDigit));
        }
        self.parse_integer_suffix();
        let digits: String = self.input[start..self.index].iter().collect();
        digits
            .parse::<i64>()
            .map_err(|_| Diagnostic::invalid_integer(start, IntegerFault::Overflow))
    }

    // Remaining digits of a run. The empty case always succeeds.
    fn parse_integer_suffix(&mut self) {
        while self.parse_digit() {}
    }

    fn parse_digit(&mut self) -> bool {
        match self.peek() {
            Some(ch) if ch.is_ascii_digit() => {
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume `expected` if it is the next character.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.index += 1;
            return true;
        }
        false
    }

    fn match_operator(&mut self, operators: &[Operator]) -> Option<Operator> {
        operators
            .iter()
            .copied()
            .find(|operator| self.match_char(operator.symbol()))
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.index).copied()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        trace!(position = diagnostic.position(), %diagnostic, "diagnostic recorded");
        self.diagnostics.push(diagnostic);
    }
}

// A missing right operand leaves the left subtree as the partial result; a
// missing left operand has nothing to keep. Either failure is already in the
// diagnostics.
fn fold(operator: Operator, lhs: Option<Node>, rhs: Option<Node>) -> Option<Node> {
    match (lhs, rhs) {
        (Some(left), Some(right)) => Some(Node::binary(operator, left, right)),
        (lhs, None) => lhs,
        (None, Some(_)) => None,
    }
}

/// Parse `input` with the default configuration.
pub fn parse(input: &str) -> ParseOutcome {
    Parser::new(input).parse()
}
