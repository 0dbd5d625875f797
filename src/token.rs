use std::fmt;

/// One of the nine letters that spell the reserved words `true`, `false` and
/// `null`. They are the only letters the completer ever treats as structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Letter {
    A,
    E,
    F,
    L,
    N,
    R,
    S,
    T,
    U,
}

impl Letter {
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Letter::A),
            'e' => Some(Letter::E),
            'f' => Some(Letter::F),
            'l' => Some(Letter::L),
            'n' => Some(Letter::N),
            'r' => Some(Letter::R),
            's' => Some(Letter::S),
            't' => Some(Letter::T),
            'u' => Some(Letter::U),
            _ => None,
        }
    }

    #[inline]
    pub fn text(self) -> &'static str {
        match self {
            Letter::A => "a",
            Letter::E => "e",
            Letter::F => "f",
            Letter::L => "l",
            Letter::N => "n",
            Letter::R => "r",
            Letter::S => "s",
            Letter::T => "t",
            Letter::U => "u",
        }
    }
}

/// The smallest classified unit of input, carrying its own display form.
///
/// End of input is not a variant; the driving loop simply runs out of bytes
/// and stack reads return `None` on underflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    ArrayOpen,
    ArrayClose,
    ObjectOpen,
    ObjectClose,
    Colon,
    Comma,
    Dot,
    Quote,
    Escape,
    Letter(Letter),
    /// Anything else: digits, whitespace, string payload, stray punctuation.
    /// Always echoed verbatim, never drives a stack transition by itself.
    Other,
}

impl Token {
    #[inline]
    pub fn classify(c: char) -> Self {
        match c {
            '[' => Token::ArrayOpen,
            ']' => Token::ArrayClose,
            '{' => Token::ObjectOpen,
            '}' => Token::ObjectClose,
            ':' => Token::Colon,
            ',' => Token::Comma,
            '.' => Token::Dot,
            '"' => Token::Quote,
            '\\' => Token::Escape,
            _ => match Letter::from_char(c) {
                Some(l) => Token::Letter(l),
                None => Token::Other,
            },
        }
    }

    /// Literal text this token contributes when rendered from the mirror
    /// stack. `Other` never lands on a stack and renders as nothing.
    #[inline]
    pub fn text(self) -> &'static str {
        match self {
            Token::ArrayOpen => "[",
            Token::ArrayClose => "]",
            Token::ObjectOpen => "{",
            Token::ObjectClose => "}",
            Token::Colon => ":",
            Token::Comma => ",",
            Token::Dot => ".",
            Token::Quote => "\"",
            Token::Escape => "\\",
            Token::Letter(l) => l.text(),
            Token::Other => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
