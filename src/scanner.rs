use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};

use crate::error::{Reporter, ScanError, Throw};
use crate::literal::Literal;
use crate::token::{Token, Type};

pub struct Scanner<'a, 'w> {
    source: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column_offset: usize,
    reporter: &'a mut Reporter<'w>,
}

impl<'a, 'w> Scanner<'a, 'w> {
    /// Creates a new scanner.
    pub fn new(source: &'a str, reporter: &'a mut Reporter<'w>) -> Scanner<'a, 'w> {
        Scanner {
            source: source.chars().peekmore(),
            tokens: vec!(),
            start: 0,
            current: 0,
            line: 1,
            column_offset: 0,
            reporter,
        }
    }

    /// Scans the source code and returns the tokens.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(
            Token::new(
                Type::EOF,
                String::from(""),
                None,
                self.line,
                self.current - self.column_offset,
            )
        );

        self.tokens
    }

    /// Consumes and returns the next character.
    /// Only called after a peek, so the end of the source is unreachable.
    fn advance(&mut self) -> char {
        match self.source.next() {
            Some(char) => {
                self.current += 1;
                char
            },
            None => panic!("tried to advance past end of the source."),
        }
    }

    /// Returns the next character without consuming it.
    fn peek(&mut self) -> Option<char> {
        self.source.reset_cursor();
        self.source.peek().copied()
    }

    /// Returns the next next character without consuming it.
    fn peek_next(&mut self) -> Option<char> {
        self.source.reset_cursor();
        self.source.peek_next().copied()
    }

    /// Returns if the character after the next one is the expected character.
    /// The next character itself is still unconsumed at this point.
    fn match_next(&mut self, expected: char) -> bool {
        self.peek_next() == Some(expected)
    }

    /// Returns if the scanner has reached the end of the source.
    fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Adds a new token to the list of tokens.
    fn add_token(&mut self, r#type: Type, lexeme: String, literal: Option<Literal>) {
        self.tokens.push(
            Token::new(
                r#type,
                lexeme,
                literal,
                self.line,
                self.start - self.column_offset,
            )
        );
    }

    /// Adds a new single char token to the list of tokens.
    fn add_single_char_token(&mut self, r#type: Type) {
        let c = self.advance();
        self.add_token(r#type, c.to_string(), None);
    }

    /// Adds a new double char token to the list of tokens.
    fn add_double_char_token(&mut self, r#type: Type) {
        let first = self.advance();
        let second = self.advance();

        self.add_token(r#type, format!("{first}{second}"), None);
    }

    /// Handles a string literal.
    fn string(&mut self) {
        self.advance(); // Move past the starting double quotes.

        // The token is pinned to the opening quotes even when the string
        // spans multiple lines.
        let start_line = self.line;
        let start_column = self.start - self.column_offset;

        let mut value = Vec::new();
        loop {
            match self.peek() {
                Some('"') => break,
                Some(c) => {
                    self.advance();
                    value.push(c);

                    if c == '\n' {
                        self.line += 1;
                        self.column_offset = self.current;
                    }
                },
                None => {
                    ScanError {
                        line: start_line,
                        message: String::from("Unterminated string"),
                    }.throw(self.reporter);
                    return;
                },
            }
        }

        self.advance(); // Move past the closing double quotes.

        let value: String = value.into_iter().collect();

        // Literal does not include the double quotes unlike the lexeme.
        self.tokens.push(
            Token::new(Type::String, value.clone(), Some(Literal::String(value)), start_line, start_column)
        );
    }

    /// Handles a number literal.
    fn number(&mut self) {
        let mut value = Vec::new();

        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            value.push(self.advance());
        }

        // A dot is only part of the number when digits follow it. Otherwise
        // it is left for the next token so `4.abs` scans as a property access.
        if self.peek() == Some('.') && matches!(self.peek_next(), Some(c) if c.is_ascii_digit()) {
            value.push(self.advance()); // Consume the dot.

            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                value.push(self.advance());
            }
        }

        let value: String = value.into_iter().collect();
        let value_num: f64 = value.parse().expect("digits to form a valid number");

        self.add_token(Type::Number, value, Some(Literal::Number(value_num)));
    }

    /// Handles an identifier or a keyword.
    fn identifier(&mut self) {
        let mut value = Vec::new();

        // is_alphanumeric does not include underscores.
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            value.push(self.advance());
        }

        let value = String::from_iter(value);
        let token_type = match value.as_str() {
            "and"      => Type::And,
            "class"    => Type::Class,
            "else"     => Type::Else,
            "false"    => Type::False,
            "for"      => Type::For,
            "fun"      => Type::Fun,
            "if"       => Type::If,
            "nil"      => Type::Nil,
            "or"       => Type::Or,
            "print"    => Type::Print,
            "return"   => Type::Return,
            "super"    => Type::Super,
            "this"     => Type::This,
            "true"     => Type::True,
            "var"      => Type::Var,
            "while"    => Type::While,
            _          => Type::Identifier,
        };

        self.add_token(token_type, value, None);
    }

    /// Scans the next token.
    fn scan_token(&mut self) {
        let Some(c) = self.peek() else { return };
        match c {
            // One character tokens
            '(' => self.add_single_char_token(Type::LeftParen),
            ')' => self.add_single_char_token(Type::RightParen),
            '{' => self.add_single_char_token(Type::LeftBrace),
            '}' => self.add_single_char_token(Type::RightBrace),
            ',' => self.add_single_char_token(Type::Comma),
            '.' => self.add_single_char_token(Type::Dot),
            '-' => self.add_single_char_token(Type::Minus),
            '+' => self.add_single_char_token(Type::Plus),
            ';' => self.add_single_char_token(Type::Semicolon),
            '*' => self.add_single_char_token(Type::Star),

            // Two character tokens
            '!' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::BangEqual);
                } else {
                    self.add_single_char_token(Type::Bang)
                };
            },
            '=' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::EqualEqual);
                } else {
                    self.add_single_char_token(Type::Equal)
                };
            },
            '<' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::LessEqual);
                } else {
                    self.add_single_char_token(Type::Less)
                };
            },
            '>' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::GreaterEqual);
                } else {
                    self.add_single_char_token(Type::Greater)
                };
            },
            '/' => {
                if self.match_next('/') {
                    while matches!(self.peek(), Some(c) if c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_single_char_token(Type::Slash);
                }
            },

            // Ignore whitespace
            ' ' | '\r' | '\t' => {
                self.advance();
            },

            // Update line counter
            '\n' => {
                self.advance();

                self.line += 1;
                self.column_offset = self.current;
            },

            // String
            '"' => self.string(),

            // Numbers
            c if c.is_ascii_digit() => self.number(),

            // Identifiers
            c if c.is_alphabetic() || c == '_' => self.identifier(),

            _ => {
                self.advance();

                ScanError {
                    line: self.line,
                    message: format!("Unexpected character '{c}'"),
                }.throw(self.reporter);
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn scan(source: &str) -> (Vec<Token>, bool) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut reporter = Reporter::new(&mut out, &mut err);
        let tokens = Scanner::new(source, &mut reporter).scan_tokens();
        (tokens, reporter.had_error())
    }

    #[test]
    fn tokens_carry_the_line_of_their_first_character() {
        let (tokens, had_error) = scan("var a = 1;\nprint a;");

        assert!(!had_error);
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 1, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn scans_one_and_two_char_operators() {
        let (tokens, _) = scan("! != = == < <= > >=");

        let types: Vec<Type> = tokens.iter().map(|t| t.r#type).collect();
        assert_eq!(types, vec![
            Type::Bang, Type::BangEqual, Type::Equal, Type::EqualEqual,
            Type::Less, Type::LessEqual, Type::Greater, Type::GreaterEqual,
            Type::EOF,
        ]);
    }

    #[test]
    fn multi_line_string_is_pinned_to_its_opening_line() {
        let (tokens, had_error) = scan("\"one\ntwo\"");

        assert!(!had_error);
        assert_eq!(tokens[0].r#type, Type::String);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].literal, Some(Literal::String(String::from("one\ntwo"))));
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn trailing_dot_is_not_part_of_a_number() {
        let (tokens, had_error) = scan("123.");

        assert!(!had_error);
        assert_eq!(tokens[0].r#type, Type::Number);
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
        assert_eq!(tokens[1].r#type, Type::Dot);
    }

    #[test]
    fn fractional_number() {
        let (tokens, _) = scan("12.75;");

        assert_eq!(tokens[0].literal, Some(Literal::Number(12.75)));
        assert_eq!(tokens[1].r#type, Type::Semicolon);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let (tokens, had_error) = scan("\"never closed");

        assert!(had_error);
        assert_eq!(tokens.len(), 1); // Only EOF.
    }

    #[test]
    fn unexpected_character_does_not_stop_the_scanner() {
        let (tokens, had_error) = scan("var a = &1;");

        assert!(had_error);
        let types: Vec<Type> = tokens.iter().map(|t| t.r#type).collect();
        assert_eq!(types, vec![
            Type::Var, Type::Identifier, Type::Equal,
            Type::Number, Type::Semicolon, Type::EOF,
        ]);
    }

    #[test]
    fn keywords_are_not_identifiers() {
        let (tokens, _) = scan("nil nilly");

        assert_eq!(tokens[0].r#type, Type::Nil);
        assert_eq!(tokens[1].r#type, Type::Identifier);
        assert_eq!(tokens[1].lexeme, "nilly");
    }

    #[test]
    fn comments_run_to_the_end_of_the_line() {
        let (tokens, _) = scan("1 // 2 3 4\n5");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].literal, Some(Literal::Number(5.0)));
        assert_eq!(tokens[1].line, 2);
    }
}
