//! Java source scanning
//!
//! Finds the top-level type declarations of a compilation unit and the
//! documentation comment attached to each. This is deliberately not a full
//! Java parser: it tokenizes just enough (comments, literals, braces,
//! parentheses, words) to know what sits at the top level.

use crate::error::ExtractorError;

/// Kind of a top-level type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `@interface`
    Annotation,
    /// `enum`
    Enum,
    /// `record`
    Record,
}

/// A top-level type declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Declaration kind
    pub kind: TypeKind,
    /// Simple name of the type
    pub name: String,
    /// Body of the attached `/** ... */` comment, without delimiters
    pub javadoc: Option<String>,
}

/// Find the primary type of a source file: the top-level type named after
/// the file. Returns `Ok(None)` when there is no such type.
pub fn primary_type(source: &str, file_stem: &str) -> Result<Option<TypeDeclaration>, ExtractorError> {
    Ok(top_level_types(source)?
        .into_iter()
        .find(|decl| decl.name == file_stem))
}

/// List every top-level type declaration in source order
pub fn top_level_types(source: &str) -> Result<Vec<TypeDeclaration>, ExtractorError> {
    let mut lexer = Lexer::new(source);
    let mut types = Vec::new();
    let mut depth = 0usize;
    let mut pending_doc: Option<String> = None;
    let mut expect_name: Option<TypeKind> = None;
    let mut after_at = false;

    while let Some(token) = lexer.next_token()? {
        if depth > 0 {
            match token {
                Token::Open => depth += 1,
                Token::Close => depth -= 1,
                _ => {}
            }
            continue;
        }

        let at = std::mem::replace(&mut after_at, false);
        match token {
            Token::DocComment(body) => pending_doc = Some(body),
            Token::Comment => pending_doc = None,
            Token::At => after_at = true,
            Token::Word(word) => {
                if let Some(kind) = expect_name.take() {
                    types.push(TypeDeclaration {
                        kind,
                        name: word,
                        javadoc: pending_doc.take(),
                    });
                    continue;
                }
                match word.as_str() {
                    "package" | "import" => pending_doc = None,
                    "interface" if at => expect_name = Some(TypeKind::Annotation),
                    "class" => expect_name = Some(TypeKind::Class),
                    "interface" => expect_name = Some(TypeKind::Interface),
                    "enum" => expect_name = Some(TypeKind::Enum),
                    "record" => expect_name = Some(TypeKind::Record),
                    // modifiers and annotation names keep the comment attached
                    _ => {}
                }
            }
            Token::OpenParen => lexer.skip_parenthesized()?,
            Token::Open => {
                depth += 1;
                pending_doc = None;
                expect_name = None;
            }
            Token::Close => {
                return Err(ExtractorError::Parse("unbalanced '}' at top level".to_string()));
            }
            Token::Semicolon => pending_doc = None,
            Token::CloseParen | Token::Literal | Token::Other => {}
        }
    }

    if depth != 0 {
        return Err(ExtractorError::Parse("unexpected end of file inside a block".to_string()));
    }
    Ok(types)
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    DocComment(String),
    Comment,
    Word(String),
    At,
    Open,
    Close,
    OpenParen,
    CloseParen,
    Semicolon,
    Literal,
    Other,
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn error(&self, message: &str) -> ExtractorError {
        ExtractorError::Parse(format!("{} (line {})", message, self.line))
    }

    fn next_token(&mut self) -> Result<Option<Token>, ExtractorError> {
        while self.peek(0).is_some_and(char::is_whitespace) {
            self.bump();
        }
        let Some(c) = self.peek(0) else {
            return Ok(None);
        };

        let token = match c {
            '/' if self.peek(1) == Some('/') => {
                while self.peek(0).is_some_and(|c| c != '\n') {
                    self.bump();
                }
                Token::Comment
            }
            '/' if self.peek(1) == Some('*') => self.block_comment()?,
            '"' => {
                self.string_literal()?;
                Token::Literal
            }
            '\'' => {
                self.char_literal()?;
                Token::Literal
            }
            '{' => {
                self.bump();
                Token::Open
            }
            '}' => {
                self.bump();
                Token::Close
            }
            '(' => {
                self.bump();
                Token::OpenParen
            }
            ')' => {
                self.bump();
                Token::CloseParen
            }
            ';' => {
                self.bump();
                Token::Semicolon
            }
            '@' => {
                self.bump();
                Token::At
            }
            c if c.is_alphabetic() || c == '_' || c == '$' => {
                let start = self.pos;
                while self
                    .peek(0)
                    .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
                {
                    self.bump();
                }
                Token::Word(self.chars[start..self.pos].iter().collect())
            }
            _ => {
                self.bump();
                Token::Other
            }
        };
        Ok(Some(token))
    }

    fn block_comment(&mut self) -> Result<Token, ExtractorError> {
        // `/**/` is an empty plain comment, not a doc comment
        let is_doc = self.peek(2) == Some('*') && self.peek(3) != Some('/');
        self.bump();
        self.bump();
        let start = self.pos;
        loop {
            match self.bump() {
                Some('*') if self.peek(0) == Some('/') => {
                    self.bump();
                    break;
                }
                Some(_) => {}
                None => return Err(self.error("unterminated comment")),
            }
        }
        if is_doc {
            // skip the second '*' of the opener, drop the closing "*/"
            let body: String = self.chars[start + 1..self.pos - 2].iter().collect();
            Ok(Token::DocComment(body))
        } else {
            Ok(Token::Comment)
        }
    }

    fn string_literal(&mut self) -> Result<(), ExtractorError> {
        if self.peek(1) == Some('"') && self.peek(2) == Some('"') {
            return self.text_block();
        }
        self.bump();
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('"') => return Ok(()),
                Some('\n') | None => return Err(self.error("unterminated string literal")),
                Some(_) => {}
            }
        }
    }

    fn text_block(&mut self) -> Result<(), ExtractorError> {
        for _ in 0..3 {
            self.bump();
        }
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('"') if self.peek(0) == Some('"') && self.peek(1) == Some('"') => {
                    self.bump();
                    self.bump();
                    return Ok(());
                }
                Some(_) => {}
                None => return Err(self.error("unterminated text block")),
            }
        }
    }

    fn char_literal(&mut self) -> Result<(), ExtractorError> {
        self.bump();
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('\'') => return Ok(()),
                Some('\n') | None => return Err(self.error("unterminated character literal")),
                Some(_) => {}
            }
        }
    }

    /// Skip to the `)` matching an already consumed `(`
    fn skip_parenthesized(&mut self) -> Result<(), ExtractorError> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.next_token()? {
                Some(Token::OpenParen) => depth += 1,
                Some(Token::CloseParen) => depth -= 1,
                Some(_) => {}
                None => return Err(self.error("unbalanced parentheses")),
            }
        }
        Ok(())
    }
}
