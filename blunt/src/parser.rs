// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use strum::AsRefStr;

use crate::{
    BinaryOp, BinaryOperator, Branch, Compound, ConditionalBranch, DotDotExpression, DotExpression, FileLocation,
    ForLoop, FunctionCall, FunctionDefinition, IfElseChain, Lexer, LexerError, Node, Token, TokenKind, Variable,
    VariableAssignment, VariableDefinition, DEFAULT_ITERATOR_NAME, DEFAULT_VARIABLE_COUNT,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Lexes and parses a whole program.
pub fn parse(source: &str) -> ParseResult<Compound> {
    Parser::new(Lexer::new(source))?.parse()
}

/// Pulls tokens from the lexer on demand, looking at most one token ahead.
pub struct Parser<'source_code> {
    lexer: Lexer<'source_code>,
    current: Token,
    previous: Option<Token>,
}

impl<'source_code> Parser<'source_code> {
    pub fn new(mut lexer: Lexer<'source_code>) -> ParseResult<Self> {
        let current = lexer.next_token()?;

        Ok(Self {
            lexer,
            current,
            previous: None,
        })
    }

    /// Parses the program up to the end of the file.
    pub fn parse(&mut self) -> ParseResult<Compound> {
        let root = self.parse_statements()?;

        if self.current.kind != TokenKind::EndOfFile {
            return Err(ParseError::StatementInvalidStart { token: self.current.clone() });
        }

        Ok(root)
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::EndOfFile
    }

    /// One or more statements, each optionally followed by a `;`, up to a `}` or the end of the file.
    fn parse_statements(&mut self) -> ParseResult<Compound> {
        let mut statements = Vec::new();

        loop {
            statements.push(self.parse_statement()?);

            if self.current.kind == TokenKind::Semicolon {
                self.consume_token()?;
            }

            if matches!(self.current.kind, TokenKind::EndOfFile | TokenKind::RightCurlyBracket) {
                break;
            }
        }

        Ok(Compound::new(statements))
    }

    pub fn parse_statement(&mut self) -> ParseResult<Node> {
        log::trace!("Parsing statement starting with {}", self.current);

        match self.current.kind {
            TokenKind::VariableDefinition => self.parse_variable_definition(),
            TokenKind::FunctionDefinition => self.parse_function_definition(),
            TokenKind::Return => self.parse_return(),
            TokenKind::If => self.parse_if_else_chain(),
            TokenKind::For => self.parse_for_loop(),
            TokenKind::Save => self.parse_save(),
            TokenKind::Period => self.parse_leading_dot(),

            TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::Integer => self.parse_expression(),

            TokenKind::Semicolon => {
                self.consume_token()?;
                Ok(Node::Noop)
            }

            _ => Err(ParseError::StatementInvalidStart { token: self.current.clone() }),
        }
    }

    fn parse_variable_definition(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::VariableDefinition, "")?;

        let count = if self.current.kind == TokenKind::Integer {
            let token = self.consume_token()?;
            match token.integer_value() {
                Some(count) if count > 0 => usize::try_from(count)
                    .map_err(|_| ParseError::InvalidVariableCount { token: token.clone() })?,
                _ => return Err(ParseError::InvalidVariableCount { token }),
            }
        } else {
            DEFAULT_VARIABLE_COUNT
        };

        let name = self.expect_identifier("after `roll`")?;
        self.expect(TokenKind::Equals, "between the variable name and its value")?;
        let value = self.parse_expression()?;

        Ok(Node::VariableDefinition(VariableDefinition {
            name,
            value: Box::new(value),
            count,
        }))
    }

    fn parse_function_definition(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::FunctionDefinition, "")?;
        let name = self.expect_identifier("after `blunt`")?;

        self.expect(TokenKind::LeftParenthesis, "after the function name")?;
        let mut parameters = Vec::new();
        while self.current.kind != TokenKind::RightParenthesis {
            parameters.push(self.expect_identifier("in the parameter list")?);

            if self.current.kind == TokenKind::Comma {
                self.consume_token()?;
            }
        }
        self.expect(TokenKind::RightParenthesis, "after the parameter list")?;

        let body = self.parse_block("function body")?;

        Ok(Node::FunctionDefinition(Rc::new(FunctionDefinition {
            name,
            parameters,
            body,
        })))
    }

    fn parse_return(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::Return, "")?;
        let value = self.parse_expression()?;
        Ok(Node::Return(Box::new(value)))
    }

    fn parse_if_else_chain(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::If, "")?;
        let mut branches = vec![Branch::If(self.parse_conditional_branch("`if`")?)];

        while self.current.kind == TokenKind::ElseIf {
            self.consume_token()?;
            branches.push(Branch::ElseIf(self.parse_conditional_branch("`elseif`")?));
        }

        if self.current.kind == TokenKind::Else {
            self.consume_token()?;
            branches.push(Branch::Else(self.parse_block("`else`")?));
        }

        Ok(Node::IfElseChain(IfElseChain { branches }))
    }

    fn parse_conditional_branch(&mut self, context: &'static str) -> ParseResult<ConditionalBranch> {
        self.expect(TokenKind::LeftParenthesis, context)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParenthesis, "after the condition")?;

        let body = self.parse_block(context)?;

        Ok(ConditionalBranch {
            condition: Box::new(condition),
            body,
        })
    }

    /// `light items { ... }` or `light items using j < 3 { ... }`.
    ///
    /// The name after `using` is both the iterator and the start of the condition.
    fn parse_for_loop(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::For, "")?;
        let subject = self.expect_identifier("after `light`")?;

        let (iterator, condition) = if self.current.kind == TokenKind::ForIterator {
            self.consume_token()?;

            if self.current.kind != TokenKind::Identifier {
                return Err(ParseError::ExpectedToken {
                    expected: TokenKind::Identifier,
                    context: "after `using`",
                    token: self.current.clone(),
                });
            }

            let iterator = self.current.text.clone();
            let condition = self.parse_expression()?;
            (iterator, Some(Box::new(condition)))
        } else {
            (DEFAULT_ITERATOR_NAME.to_string(), None)
        };

        let body = self.parse_block("`light` loop")?;

        Ok(Node::ForLoop(ForLoop {
            subject,
            iterator,
            condition,
            body,
        }))
    }

    fn parse_save(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::Save, "")?;
        let name = self.expect_identifier("after `keep`")?;
        Ok(Node::Save(Variable::new(name)))
    }

    /// A statement starting with `.` indexes the name right before it.
    fn parse_leading_dot(&mut self) -> ParseResult<Node> {
        let variable = match &self.previous {
            Some(token) if token.kind == TokenKind::Identifier => token.text.clone(),
            _ => return Err(ParseError::DotWithoutVariable { token: self.current.clone() }),
        };

        self.parse_dot_expression(variable)
    }

    fn parse_block(&mut self, context: &'static str) -> ParseResult<Compound> {
        self.expect(TokenKind::LeftCurlyBracket, context)?;
        let body = self.parse_statements()?;
        self.expect(TokenKind::RightCurlyBracket, context)?;
        Ok(body)
    }

    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_expression_with_precedence(0)
    }

    /// Parses a factor, then keeps folding in operators that bind tighter than `min_precedence`.
    fn parse_expression_with_precedence(&mut self, min_precedence: u8) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;

        while let Some(operator) = BinaryOperator::from_token_kind(self.current.kind) {
            if operator.precedence() <= min_precedence {
                break;
            }

            self.consume_token()?;
            let right = self.parse_expression_with_precedence(operator.precedence())?;

            left = Node::BinaryOp(BinaryOp {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> ParseResult<Node> {
        match self.current.kind {
            TokenKind::Integer => self.parse_integer(),
            TokenKind::StringLiteral => Ok(Node::StringLiteral(self.consume_token()?.text)),
            TokenKind::Identifier => self.parse_identifier(),
            TokenKind::LeftSquareBracket => self.parse_array(),
            TokenKind::LeftParenthesis => self.parse_nested_expression(),

            TokenKind::Not => {
                self.consume_token()?;
                let operand = self.parse_factor()?;
                Ok(Node::Not(Box::new(operand)))
            }

            TokenKind::Period => {
                self.consume_token()?;
                Ok(Node::DotDotMarker)
            }

            _ => Err(ParseError::UnknownStartOfExpression { token: self.current.clone() }),
        }
    }

    fn parse_integer(&mut self) -> ParseResult<Node> {
        let token = self.expect(TokenKind::Integer, "")?;
        match token.integer_value() {
            Some(value) => Ok(Node::IntegerLiteral(value)),
            None => Err(ParseError::UnknownStartOfExpression { token }),
        }
    }

    fn parse_nested_expression(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::LeftParenthesis, "")?;
        let expression = self.parse_expression()?;
        self.expect(TokenKind::RightParenthesis, "after the expression")?;
        Ok(Node::NestedExpression(Box::new(expression)))
    }

    fn parse_array(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::LeftSquareBracket, "")?;

        let mut elements = Vec::new();
        while self.current.kind != TokenKind::RightSquareBracket {
            elements.push(self.parse_expression()?);

            if self.current.kind == TokenKind::Comma {
                self.consume_token()?;
            }
        }

        self.expect(TokenKind::RightSquareBracket, "after the array elements")?;
        Ok(Node::Array(elements))
    }

    /// A name, and whatever the next token turns it into: a call, an assignment, an index or a
    /// dot-expression.
    fn parse_identifier(&mut self) -> ParseResult<Node> {
        let name = self.expect_identifier("")?;

        match self.current.kind {
            TokenKind::LeftParenthesis => self.parse_function_call(name),

            TokenKind::Equals => {
                self.consume_token()?;
                let value = self.parse_expression()?;
                Ok(Node::VariableAssignment(VariableAssignment {
                    name,
                    index: None,
                    value: Box::new(value),
                }))
            }

            TokenKind::LeftSquareBracket => self.parse_bracket_index(name),
            TokenKind::Period => self.parse_dot_expression(name),

            _ => Ok(Node::Variable(Variable::new(name))),
        }
    }

    fn parse_function_call(&mut self, name: String) -> ParseResult<Node> {
        self.expect(TokenKind::LeftParenthesis, "")?;

        let mut arguments = Vec::new();
        while self.current.kind != TokenKind::RightParenthesis {
            arguments.push(self.parse_expression()?);

            if self.current.kind == TokenKind::Comma {
                self.consume_token()?;
            }
        }

        self.expect(TokenKind::RightParenthesis, "after the call arguments")?;
        Ok(Node::FunctionCall(FunctionCall { name, arguments }))
    }

    /// `name[index]` reads an element, `name[index] = value` writes one.
    fn parse_bracket_index(&mut self, name: String) -> ParseResult<Node> {
        self.expect(TokenKind::LeftSquareBracket, "")?;
        let index = Box::new(Node::NestedExpression(Box::new(self.parse_expression()?)));
        self.expect(TokenKind::RightSquareBracket, "after the index")?;

        if self.current.kind != TokenKind::Equals {
            return Ok(Node::DotExpression(DotExpression { variable: name, index }));
        }

        self.consume_token()?;
        let value = self.parse_expression()?;
        Ok(Node::VariableAssignment(VariableAssignment {
            name,
            index: Some(index),
            value: Box::new(value),
        }))
    }

    fn parse_dot_expression(&mut self, variable: String) -> ParseResult<Node> {
        self.expect(TokenKind::Period, "")?;

        let index_token = self.current.clone();
        let index = self.parse_dot_index()?;

        match self.current.kind {
            TokenKind::Equals => {
                let field = match &index {
                    Node::IntegerLiteral(value) => value.to_string(),
                    Node::Variable(index) => index.name.clone(),
                    _ => return Err(ParseError::InvalidAssignmentIndex { token: index_token }),
                };

                self.consume_token()?;
                let value = self.parse_expression()?;

                Ok(Node::VariableAssignment(VariableAssignment {
                    name: format!("{variable}.{field}"),
                    index: None,
                    value: Box::new(value),
                }))
            }

            TokenKind::Period => {
                self.consume_token()?;
                let last = self.parse_dot_index()?;

                Ok(Node::DotDotExpression(DotDotExpression {
                    variable,
                    first: Box::new(index),
                    last: Box::new(last),
                }))
            }

            _ => Ok(Node::DotExpression(DotExpression {
                variable,
                index: Box::new(index),
            })),
        }
    }

    /// A single factor after a `.`. Where no factor can start, the index is the dot-dot marker,
    /// which makes `s.` the last element and `s.1.` the rest of `s` from `1`.
    fn parse_dot_index(&mut self) -> ParseResult<Node> {
        match self.current.kind {
            TokenKind::Identifier => {
                let name = self.expect_identifier("")?;

                if self.current.kind == TokenKind::LeftParenthesis {
                    self.parse_function_call(name)
                } else {
                    Ok(Node::Variable(Variable::new(name)))
                }
            }

            TokenKind::Integer
                | TokenKind::StringLiteral
                | TokenKind::LeftSquareBracket
                | TokenKind::LeftParenthesis
                | TokenKind::Not
                | TokenKind::Period => self.parse_factor(),

            _ => Ok(Node::DotDotMarker),
        }
    }

    fn consume_token(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        let token = std::mem::replace(&mut self.current, next);
        self.previous = Some(token.clone());
        Ok(token)
    }

    fn expect(&mut self, expected: TokenKind, context: &'static str) -> ParseResult<Token> {
        if self.current.kind != expected {
            return Err(ParseError::ExpectedToken {
                expected,
                context,
                token: self.current.clone(),
            });
        }

        self.consume_token()
    }

    fn expect_identifier(&mut self, context: &'static str) -> ParseResult<String> {
        Ok(self.expect(TokenKind::Identifier, context)?.text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, AsRefStr)]
pub enum ParseError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("Expected {expected} {context}, but got {token}")]
    ExpectedToken { expected: TokenKind, context: &'static str, token: Token },

    #[error("Invalid start of a statement: {token}")]
    StatementInvalidStart { token: Token },

    #[error("Unknown start of an expression: {token}")]
    UnknownStartOfExpression { token: Token },

    #[error("Variable count must be greater than 0, but got {token}")]
    InvalidVariableCount { token: Token },

    #[error("Only an integer or a variable can index an assignment, but got {token}")]
    InvalidAssignmentIndex { token: Token },

    #[error("A leading `.` must follow a variable name")]
    DotWithoutVariable { token: Token },
}

impl ParseError {
    #[must_use]
    pub fn location(&self) -> FileLocation {
        match self {
            Self::Lexer(error) => error.location,
            Self::ExpectedToken { token, .. } => token.location,
            Self::StatementInvalidStart { token } => token.location,
            Self::UnknownStartOfExpression { token } => token.location,
            Self::InvalidVariableCount { token } => token.location,
            Self::InvalidAssignmentIndex { token } => token.location,
            Self::DotWithoutVariable { token } => token.location,
        }
    }

    /// `LexicalError` or `SyntaxError`.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Lexer(..) => "LexicalError",
            _ => "SyntaxError",
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
