use std::fmt;

use logos::Logos;

/// Raw lexemes recognised by `logos`.
///
/// Words are not split into keywords here; that happens in [`Lexer`] through a
/// case-insensitive table lookup. Positions are computed by [`Lexer`] too.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// `# comments`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    HashComment,
    /// `// comments`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    SlashComment,
    /// `~ comments`
    #[regex(r"~[^\n]*", logos::skip, allow_greedy = true)]
    TildeComment,
    /// Ordinary and block string literals; the value has escapes resolved.
    #[token("\"", lex_string)]
    Str(String),
    /// Digits with at most one dot, such as `42`, `3.14` or `1.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// Identifiers and keywords. Any Unicode letter may start one.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Word,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<=`
    #[token("<=")]
    LtEq,
    /// `>=`
    #[token(">=")]
    GtEq,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `=`
    #[token("=")]
    Assign,
}

/// Scans a string literal whose opening `"` has just been matched.
///
/// A second `"` right after the first opens a block string, which runs to the
/// next `""` and may span lines. An ordinary string runs to the next unescaped
/// `"`. Either kind runs to the end of input when unterminated.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> String {
    let rest = lex.remainder();
    let block = rest.starts_with('"');
    let body = if block { &rest[1..] } else { rest };

    let mut value = String::new();
    let mut consumed = body.len();
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' if !block => {
                consumed = i + 1;
                break;
            },
            '"' if body[i + 1..].starts_with('"') => {
                consumed = i + 2;
                break;
            },
            '\\' => match chars.next() {
                Some((_, escaped)) => value.push(unescape(escaped)),
                None => break,
            },
            other => value.push(other),
        }
    }

    lex.bump(consumed + usize::from(block));
    value
}

/// Resolves the character after a backslash. Unknown escapes pass through.
const fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    }
}

/// Defines an enum of words that tokenize to a kind of their own, with a
/// lowercase lookup and an uppercase display name.
macro_rules! word_kinds {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $word:literal $(| $alias:literal)*),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            fn from_word(word: &str) -> Option<Self> {
                match word {
                    $($word $(| $alias)* => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Gets the canonical lowercase spelling.
            #[must_use]
            pub const fn word(self) -> &'static str {
                match self {
                    $(Self::$variant => $word,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.word().to_ascii_uppercase())
            }
        }
    };
}

word_kinds! {
    /// Keywords that are reserved by the language but have no grammar rule.
    ///
    /// They cannot be used as identifiers.
    Reserved {
        Class => "class",
        New => "new",
        Super => "super",
        This => "this",
        Override => "override",
        Static => "static",
        Try => "try",
        Catch => "catch",
        Finally => "finally",
        Throw => "throw",
        Assert => "assert",
        Async => "async",
        Await => "await",
        Import => "import",
        Export => "export",
        From => "from",
        As => "as",
        For => "for",
        Switch => "switch",
        Case => "case",
        Default => "default",
        Break => "break",
        Continue => "continue",
        With => "with",
        Defer => "defer",
        When => "when",
        After => "after",
        Because => "because",
        Since => "since",
        Without => "without",
        To => "to",
        Trace => "trace",
        Monitor => "monitor",
        Quarantine => "quarantine",
        Alert => "alert" | "altert",
    }
}

word_kinds! {
    /// Security domain words, kept out of the identifier space for host
    /// extensions.
    DomainWord {
        Firewall => "firewall",
        Tunnel => "tunnel",
        Keylogger => "keylogger",
        Generate => "generate",
        Hash => "hash",
        Encrypt => "encrypt",
        Decrypt => "decrypt",
        Protect => "protect",
        Attack => "attack",
        Defend => "defend",
        Activate => "activate",
        Deactivate => "deactivate",
        Analyze => "analyze",
        Contain => "contain",
        Payload => "payload",
        Load => "load",
        Manipulate => "manipulate",
        Inject => "inject",
        Read => "read",
        Write => "write",
        Save => "save",
        Corrupt => "corrupt",
        Pause => "pause",
        Enter => "enter",
        Exit => "exit",
        Table => "table",
        Brute => "brute",
    }
}

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A plain identifier.
    Ident,
    /// A number literal; the text is converted by the parser.
    Number,
    /// A string literal with escapes resolved.
    Str,
    /// A character the lexer does not recognise.
    Illegal,
    /// End of input. Returned forever once reached.
    Eof,

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!` or `not`
    Bang,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==` or `is`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `&&` or `and`
    And,
    /// `||` or `or`
    Or,
    /// `nor`
    Nor,
    /// `in`
    In,

    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// `let`
    Let,
    /// `set`
    Set,
    /// `fn` or `def`
    Fn,
    /// `return`
    Return,
    /// `if`
    If,
    /// `then`
    Then,
    /// `however`
    However,
    /// `else`
    Else,
    /// `yet`
    Yet,
    /// `otherwise`
    Otherwise,
    /// `unless`
    Unless,
    /// `while`
    While,
    /// `until`
    Until,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    /// A reserved keyword without a grammar rule.
    Reserved(Reserved),
    /// A reserved domain word.
    Domain(DomainWord),
}

impl TokenKind {
    /// Whether the token is spelled as a word (identifier, keyword or
    /// reserved word). Such tokens may name object properties.
    #[must_use]
    pub const fn is_word(self) -> bool {
        use TokenKind::{
            Domain, Else, False, Fn, However, Ident, If, Let, Null, Otherwise, Reserved, Return,
            Set, Then, True, Unless, Until, While, Yet,
        };
        matches!(self,
                 Ident
                 | Let
                 | Set
                 | Fn
                 | Return
                 | If
                 | Then
                 | However
                 | Else
                 | Yet
                 | Otherwise
                 | Unless
                 | While
                 | Until
                 | True
                 | False
                 | Null
                 | Reserved(_)
                 | Domain(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reserved(word) => return write!(f, "{word}"),
            Self::Domain(word) => return write!(f, "{word}"),
            Self::Ident => "IDENT",
            Self::Number => "NUMBER",
            Self::Str => "STRING",
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Percent => "PERCENT",
            Self::Bang => "BANG",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NEQ",
            Self::LtEq => "LTE",
            Self::GtEq => "GTE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Nor => "NOR",
            Self::In => "IN",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Semicolon => "SEMICOLON",
            Self::Dot => "DOT",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Let => "LET",
            Self::Set => "SET",
            Self::Fn => "FN",
            Self::Return => "RETURN",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::However => "HOWEVER",
            Self::Else => "ELSE",
            Self::Yet => "YET",
            Self::Otherwise => "OTHERWISE",
            Self::Unless => "UNLESS",
            Self::While => "WHILE",
            Self::Until => "UNTIL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
        };
        write!(f, "{name}")
    }
}

/// A token with its literal text and 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:    TokenKind,
    /// The token text. Word operators carry their symbolic spelling (`and`
    /// becomes `&&`) and strings carry their unescaped value.
    pub literal: String,
    /// Line of the first character.
    pub line:    usize,
    /// Column of the first character, counted in characters.
    pub col:     usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            kind => write!(f, "{kind} '{}'", self.literal),
        }
    }
}

/// Looks up a word in the keyword alias table.
///
/// Returns the kind and, for word operators, the symbolic literal they are
/// rewritten to.
fn keyword(word: &str) -> Option<(TokenKind, Option<&'static str>)> {
    let lower = word.to_lowercase();
    let found = match lower.as_str() {
        "let" => (TokenKind::Let, None),
        "set" => (TokenKind::Set, None),
        "fn" | "def" => (TokenKind::Fn, None),
        "return" => (TokenKind::Return, None),
        "if" => (TokenKind::If, None),
        "then" => (TokenKind::Then, None),
        "however" => (TokenKind::However, None),
        "else" => (TokenKind::Else, None),
        "yet" => (TokenKind::Yet, None),
        "otherwise" => (TokenKind::Otherwise, None),
        "unless" => (TokenKind::Unless, None),
        "while" => (TokenKind::While, None),
        "until" => (TokenKind::Until, None),
        "true" => (TokenKind::True, None),
        "false" => (TokenKind::False, None),
        "null" => (TokenKind::Null, None),
        "and" => (TokenKind::And, Some("&&")),
        "or" => (TokenKind::Or, Some("||")),
        "not" => (TokenKind::Bang, Some("!")),
        "is" => (TokenKind::Eq, Some("==")),
        "nor" => (TokenKind::Nor, Some("NOR")),
        "in" => (TokenKind::In, Some("IN")),
        other => {
            return Reserved::from_word(other).map(|r| (TokenKind::Reserved(r), None))
                                             .or_else(|| {
                                                 DomainWord::from_word(other)
                                                     .map(|d| (TokenKind::Domain(d), None))
                                             });
        },
    };
    Some(found)
}

/// Tells whether `name` lexes as a single plain identifier.
///
/// Keywords, reserved words and domain words all have their own token kind,
/// so a script can never refer to a binding with one of those names.
///
/// # Example
/// ```
/// use aegis::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("counter"));
/// assert!(!is_identifier("while"));
/// assert!(!is_identifier("firewall"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut lexer = Lexer::new(name);
    lexer.next_token().kind == TokenKind::Ident && lexer.next_token().kind == TokenKind::Eof
}

/// Turns source text into [`Token`]s one at a time.
///
/// # Example
/// ```
/// use aegis::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let x = 1 and y");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().kind, TokenKind::Ident);
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().kind, TokenKind::Number);
///
/// let and = lexer.next_token();
/// assert_eq!(and.kind, TokenKind::And);
/// assert_eq!(and.literal, "&&");
/// ```
pub struct Lexer<'s> {
    source:     &'s str,
    inner:      logos::Lexer<'s, RawToken>,
    /// Line of the byte at `scanned`.
    line:       usize,
    /// Byte offset where the current line starts.
    line_start: usize,
    /// Byte offset up to which newlines have been counted.
    scanned:    usize,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { source,
               inner: RawToken::lexer(source),
               line: 1,
               line_start: 0,
               scanned: 0 }
    }

    /// Returns the next token. Once the input is exhausted every call
    /// returns an `EOF` token.
    pub fn next_token(&mut self) -> Token {
        let Some(raw) = self.inner.next() else {
            let (line, col) = self.position_of(self.source.len());
            return Token { kind: TokenKind::Eof,
                           literal: String::new(),
                           line,
                           col };
        };

        let span = self.inner.span();
        let slice = self.inner.slice();
        let (line, col) = self.position_of(span.start);

        let (kind, literal) = match raw {
            Ok(RawToken::Str(value)) => (TokenKind::Str, value),
            Ok(RawToken::Word) => match keyword(slice) {
                Some((kind, Some(symbol))) => (kind, symbol.to_string()),
                Some((kind, None)) => (kind, slice.to_string()),
                None => (TokenKind::Ident, slice.to_string()),
            },
            Ok(raw) => (Self::simple_kind(&raw), slice.to_string()),
            Err(()) => (TokenKind::Illegal, slice.to_string()),
        };

        Token { kind,
                literal,
                line,
                col }
    }

    /// Lexes the whole input. The returned vector ends with exactly one
    /// `EOF` token.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Advances the newline count to `offset` and returns its line and
    /// column.
    fn position_of(&mut self, offset: usize) -> (usize, usize) {
        let skipped = &self.source[self.scanned..offset];
        for (i, c) in skipped.char_indices() {
            if c == '\n' {
                self.line += 1;
                self.line_start = self.scanned + i + 1;
            }
        }
        self.scanned = offset;

        let col = self.source[self.line_start..offset].chars().count() + 1;
        (self.line, col)
    }

    /// Maps a punctuation or operator lexeme to its kind.
    const fn simple_kind(raw: &RawToken) -> TokenKind {
        match raw {
            RawToken::Number => TokenKind::Number,
            RawToken::Eq => TokenKind::Eq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::And => TokenKind::And,
            RawToken::Or => TokenKind::Or,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Asterisk => TokenKind::Asterisk,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Assign => TokenKind::Assign,
            // Skipped or handled by the caller.
            RawToken::HashComment
            | RawToken::SlashComment
            | RawToken::TildeComment
            | RawToken::Str(_)
            | RawToken::Word => TokenKind::Illegal,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize()
                          .into_iter()
                          .map(|t| t.kind)
                          .collect()
    }

    #[test]
    fn two_character_operators_win_over_single() {
        assert_eq!(kinds("== != <= >= && || = ! < >"),
                   vec![TokenKind::Eq,
                        TokenKind::NotEq,
                        TokenKind::LtEq,
                        TokenKind::GtEq,
                        TokenKind::And,
                        TokenKind::Or,
                        TokenKind::Assign,
                        TokenKind::Bang,
                        TokenKind::Lt,
                        TokenKind::Gt,
                        TokenKind::Eof]);
    }

    #[test]
    fn all_three_comment_styles_are_skipped() {
        let source = "# hash\n1 // slashes\n~ tilde\n2";
        let tokens = Lexer::new(source).tokenize();

        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[0].literal.as_str(), tokens[0].line), ("1", 2));
        assert_eq!((tokens[1].literal.as_str(), tokens[1].line), ("2", 4));
    }

    #[test]
    fn positions_are_one_based() {
        let tokens = Lexer::new("let a = 1;\n  set a = 2").tokenize();

        assert_eq!((tokens[0].line, tokens[0].col), (1, 1));
        assert_eq!((tokens[3].line, tokens[3].col), (1, 9));
        assert_eq!((tokens[5].kind, tokens[5].line, tokens[5].col), (TokenKind::Set, 2, 3));
    }

    #[test]
    fn keywords_are_case_insensitive_and_aliased() {
        assert_eq!(kinds("LET Set def Fn"),
                   vec![TokenKind::Let,
                        TokenKind::Set,
                        TokenKind::Fn,
                        TokenKind::Fn,
                        TokenKind::Eof]);
    }

    #[test]
    fn word_operators_are_rewritten() {
        let literals: Vec<_> = Lexer::new("and or not is nor in").tokenize()
                                                                 .into_iter()
                                                                 .map(|t| (t.kind, t.literal))
                                                                 .collect();

        assert_eq!(literals,
                   vec![(TokenKind::And, "&&".to_string()),
                        (TokenKind::Or, "||".to_string()),
                        (TokenKind::Bang, "!".to_string()),
                        (TokenKind::Eq, "==".to_string()),
                        (TokenKind::Nor, "NOR".to_string()),
                        (TokenKind::In, "IN".to_string()),
                        (TokenKind::Eof, String::new())]);
    }

    #[test]
    fn reserved_and_domain_words_get_their_own_kinds() {
        assert_eq!(kinds("class firewall Altert readme"),
                   vec![TokenKind::Reserved(Reserved::Class),
                        TokenKind::Domain(DomainWord::Firewall),
                        TokenKind::Reserved(Reserved::Alert),
                        TokenKind::Ident,
                        TokenKind::Eof]);
        assert_eq!(TokenKind::Domain(DomainWord::Keylogger).to_string(), "KEYLOGGER");
    }

    #[test]
    fn strings_resolve_escapes() {
        let tokens = Lexer::new(r#""a\"b\n\q\\""#).tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].literal, "a\"b\nq\\");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn block_strings_span_lines_and_keep_quotes() {
        let source = "\"\"it's a \"quoted\"\nblock\"\" x";
        let tokens = Lexer::new(source).tokenize();

        assert_eq!(tokens[0].literal, "it's a \"quoted\"\nblock");
        assert_eq!((tokens[1].kind, tokens[1].line, tokens[1].col), (TokenKind::Ident, 2, 9));
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        let tokens = Lexer::new("\"open").tokenize();

        assert_eq!(tokens[0].literal, "open");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn numbers_take_at_most_one_dot() {
        let literals: Vec<_> = Lexer::new("1 2.5 3.4.5").tokenize()
                                                       .into_iter()
                                                       .map(|t| t.literal)
                                                       .collect();

        assert_eq!(literals, vec!["1", "2.5", "3.4", ".", "5", ""]);
    }

    #[test]
    fn identifiers_accept_unicode_letters() {
        let tokens = Lexer::new("é naïve_2 名前 LÉT").tokenize();
        let literals: Vec<_> = tokens.iter().map(|t| t.literal.as_str()).collect();

        assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Ident));
        assert_eq!(literals, vec!["é", "naïve_2", "名前", "LÉT", ""]);
        assert_eq!(tokens[2].col, 11);
    }

    #[test]
    fn is_identifier_rejects_words_with_their_own_kind() {
        assert!(is_identifier("double"));
        assert!(is_identifier("données"));
        assert!(!is_identifier("payload"));
        assert!(!is_identifier("Class"));
        assert!(!is_identifier("let"));
        assert!(!is_identifier("two words"));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn unknown_characters_become_illegal_tokens() {
        let tokens = Lexer::new("a @ b").tokenize();

        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, "@");
        assert_eq!(tokens[2].kind, TokenKind::Ident);
    }

    #[test]
    fn eof_repeats() {
        let mut lexer = Lexer::new("x");
        lexer.next_token();

        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
