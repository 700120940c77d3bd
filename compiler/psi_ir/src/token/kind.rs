//! Token kinds for PSI, laid out in category ranges.

use std::fmt;

/// Ordinal one past the last keyword. Never the discriminant of a real kind.
pub const END_KEYWORDS: u8 = 18;
/// Ordinal one past the last operator. Never the discriminant of a real kind.
pub const END_OPERATORS: u8 = 30;
/// Ordinal one past the last punctuation mark. Never the discriminant of a real kind.
pub const END_PUNCTUATION: u8 = 37;

/// Lexical category of a token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Operator,
    Punctuation,
    /// Identifiers, literals, end of input and errors.
    Other,
}

impl Category {
    /// Classify a raw ordinal against the three range boundaries.
    ///
    /// Total over `u8`: boundary ordinals and anything past the last kind
    /// fall into the range they terminate or into [`Category::Other`].
    #[inline]
    pub const fn of_ordinal(ordinal: u8) -> Category {
        if ordinal < END_KEYWORDS {
            Category::Keyword
        } else if ordinal < END_OPERATORS {
            Category::Operator
        } else if ordinal < END_PUNCTUATION {
            Category::Punctuation
        } else {
            Category::Other
        }
    }
}

/// Token kinds for PSI.
///
/// | Range | Category    |
/// |-------|-------------|
/// | 0-17  | Keywords    |
/// | 18    | boundary    |
/// | 19-29 | Operators   |
/// | 30    | boundary    |
/// | 31-36 | Punctuation |
/// | 37    | boundary    |
/// | 38-45 | Other       |
///
/// The boundary ordinals are gaps in the discriminants, so a token can
/// never carry one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Keywords (0-17) ===
    Program = 0,
    Var = 1,
    If = 2,
    Then = 3,
    While = 4,
    Else = 5,
    For = 6,
    To = 7,
    Downto = 8,
    Do = 9,
    Begin = 10,
    End = 11,
    Print = 12,
    Type = 13,
    Not = 14,
    Or = 15,
    And = 16,
    Mod = 17,

    // === Operators (19-29) ===
    Add = 19,    // +
    Sub = 20,    // -
    Mul = 21,    // *
    Div = 22,    // /
    Neq = 23,    // <>
    Leq = 24,    // <=
    Geq = 25,    // >=
    Eq = 26,     // =
    Lt = 27,     // <
    Gt = 28,     // >
    Assign = 29, // :=

    // === Punctuation (31-36) ===
    Semi = 31,   // ;
    Period = 32, // .
    Comma = 33,  // ,
    Open = 34,   // (
    Close = 35,  // )
    Colon = 36,  // :

    // === Other (38-45) ===
    Ident = 38,
    Integer = 39,
    Real = 40,
    Boolean = 41,
    String = 42,
    Char = 43,
    Eof = 44,
    Error = 45,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 43] = [
        Self::Program,
        Self::Var,
        Self::If,
        Self::Then,
        Self::While,
        Self::Else,
        Self::For,
        Self::To,
        Self::Downto,
        Self::Do,
        Self::Begin,
        Self::End,
        Self::Print,
        Self::Type,
        Self::Not,
        Self::Or,
        Self::And,
        Self::Mod,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Neq,
        Self::Leq,
        Self::Geq,
        Self::Eq,
        Self::Lt,
        Self::Gt,
        Self::Assign,
        Self::Semi,
        Self::Period,
        Self::Comma,
        Self::Open,
        Self::Close,
        Self::Colon,
        Self::Ident,
        Self::Integer,
        Self::Real,
        Self::Boolean,
        Self::String,
        Self::Char,
        Self::Eof,
        Self::Error,
    ];

    /// Look up the kind with the given discriminant.
    ///
    /// Returns `None` for the three boundary ordinals and for anything past
    /// [`TokenKind::Error`].
    pub fn from_ordinal(ordinal: u8) -> Option<TokenKind> {
        Self::ALL.iter().copied().find(|kind| *kind as u8 == ordinal)
    }

    #[inline]
    pub const fn category(self) -> Category {
        Category::of_ordinal(self as u8)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self.category(), Category::Keyword)
    }

    /// Upper-case name of the kind, as it appears in diagnostics and
    /// serialized trees.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Program => "PROGRAM",
            Self::Var => "VAR",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::While => "WHILE",
            Self::Else => "ELSE",
            Self::For => "FOR",
            Self::To => "TO",
            Self::Downto => "DOWNTO",
            Self::Do => "DO",
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Print => "PRINT",
            Self::Type => "TYPE",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Mod => "MOD",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Neq => "NEQ",
            Self::Leq => "LEQ",
            Self::Geq => "GEQ",
            Self::Eq => "EQ",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Assign => "ASSIGN",
            Self::Semi => "SEMI",
            Self::Period => "PERIOD",
            Self::Comma => "COMMA",
            Self::Open => "OPEN",
            Self::Close => "CLOSE",
            Self::Colon => "COLON",
            Self::Ident => "IDENT",
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Char => "CHAR",
            Self::Eof => "EOF",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
