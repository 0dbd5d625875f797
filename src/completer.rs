use crate::error::{CompleteError, CompleteErrorKind};
use crate::literal::{Keyword, LiteralRun};
use crate::options::Options;
use crate::stack::TokenStack;
use crate::token::{Letter, Token};
use crate::trace::TraceEvent;
use memchr::memchr2;

/// Where the stream currently stands. Derived from the stacks in one place
/// (`Completer::parse_state`) so the reachable states stay enumerable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseState {
    /// Nothing open: no input yet, or a complete top-level value was read.
    AtTopLevel,
    /// Inside an object, between members or before a key.
    InObject,
    /// Inside an object key string.
    InObjectKey,
    /// Key closed, colon not yet seen.
    AwaitingColon,
    /// Colon seen, value not started; the `null` hypothesis is pending.
    AwaitingValue,
    /// Inside an object value string.
    InObjectValue,
    /// Inside an array, between elements.
    InArray,
    /// Inside an array element string.
    InArrayElement,
    /// Partway through `true`, `false` or `null`.
    InLiteral,
}

/// Incremental completer for truncated JSON.
///
/// Feed input with [`append`](Completer::append) in chunks of any size and
/// split at any byte; read back the shortest valid completion at any time
/// with [`complete`](Completer::complete). Internally every byte is echoed
/// into an append-only content buffer while two stacks track context: the
/// token stack remembers what was accepted, the mirror stack holds the exact
/// closing suffix still owed. `content + suffix` is valid JSON at every call
/// boundary.
#[derive(Debug, Default)]
pub struct Completer {
    opts: Options,
    content: String,
    tokens: TokenStack,
    mirror: TokenStack,
    literal: Option<LiteralRun>,
    escaped: bool,
    trace: Vec<TraceEvent>,
}

impl Completer {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(opts: Options) -> Self {
        Self {
            opts,
            ..Self::default()
        }
    }

    /// Feed the next slice of input, processing it byte by byte.
    ///
    /// Chunks may split anywhere, including inside a keyword or an escape
    /// sequence. On a structural error the already-echoed bytes stay in the
    /// content buffer but the completer is no longer trustworthy.
    pub fn append(&mut self, chunk: &str) -> Result<(), CompleteError> {
        let mut rest = chunk;
        while !rest.is_empty() {
            if self.in_string() && !self.escaped {
                // Bulk-echo string payload up to the next quote or escape.
                // Both are ASCII, so the found offset is a char boundary.
                match memchr2(b'"', b'\\', rest.as_bytes()) {
                    Some(0) => {}
                    Some(p) => {
                        self.content.push_str(&rest[..p]);
                        rest = &rest[p..];
                        continue;
                    }
                    None => {
                        self.content.push_str(rest);
                        return Ok(());
                    }
                }
            }
            let Some(c) = rest.chars().next() else { break };
            rest = &rest[c.len_utf8()..];
            self.process(c)?;
        }
        Ok(())
    }

    /// The best-effort valid document: everything received so far plus the
    /// live closing suffix. Pure and repeatable; calling it any number of
    /// times between appends returns the same value.
    pub fn complete(&self) -> String {
        let mut out = String::with_capacity(self.content.len() + self.mirror.len() + 8);
        out.push_str(&self.content);
        if self.escaped {
            // Finish a pending escape as an escaped backslash so the closing
            // quote below is not swallowed.
            out.push('\\');
        }
        if self.opts.apply_tail_repairs
            && let Some(fix) = self.tail_repair()
        {
            out.push_str(fix);
        }
        self.mirror.append_reversed(&mut out);
        out
    }

    /// The closing suffix currently owed, without the content buffer.
    pub fn pending_suffix(&self) -> String {
        let mut out = String::with_capacity(self.mirror.len());
        self.mirror.append_reversed(&mut out);
        out
    }

    /// Verbatim input received so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when no closing suffix is owed, i.e. after a complete document.
    pub fn is_balanced(&self) -> bool {
        self.mirror.is_empty()
    }

    /// Trace events recorded so far. Empty unless `Options::tracing` is set.
    pub fn trace_events(&self) -> &[TraceEvent] {
        &self.trace
    }

    /// Current parse position, derived from the stacks.
    pub fn parse_state(&self) -> ParseState {
        if self.literal.is_some() {
            return ParseState::InLiteral;
        }
        match self.mirror.top() {
            None => ParseState::AtTopLevel,
            Some(Token::ObjectClose) => ParseState::InObject,
            Some(Token::ArrayClose) => ParseState::InArray,
            Some(Token::Colon) => ParseState::AwaitingColon,
            Some(Token::Letter(_)) => ParseState::AwaitingValue,
            Some(Token::Quote) => match self.mirror.peek(1) {
                Some(Token::Colon) => ParseState::InObjectKey,
                Some(Token::ArrayClose) => ParseState::InArrayElement,
                // a quote is only ever mirrored above a colon, an object
                // closer or an array closer
                _ => ParseState::InObjectValue,
            },
            // opens, commas, dots and passthrough bytes are never mirrored
            _ => ParseState::AtTopLevel,
        }
    }

    #[inline]
    fn in_string(&self) -> bool {
        matches!(self.mirror.top(), Some(Token::Quote))
    }

    fn process(&mut self, c: char) -> Result<(), CompleteError> {
        if self.in_string() {
            return self.string_byte(c);
        }
        match Token::classify(c) {
            Token::ObjectOpen => self.open_container(c, Token::ObjectOpen, Token::ObjectClose),
            Token::ArrayOpen => self.open_container(c, Token::ArrayOpen, Token::ArrayClose),
            Token::ObjectClose => self.close_container(c, Token::ObjectClose)?,
            Token::ArrayClose => self.close_container(c, Token::ArrayClose)?,
            Token::Quote => self.open_string(c)?,
            Token::Colon => self.colon(c),
            Token::Dot => self.dot(c),
            Token::Letter(l) => self.letter(c, l),
            Token::Comma | Token::Escape | Token::Other => self.other(c),
        }
        Ok(())
    }

    fn string_byte(&mut self, c: char) -> Result<(), CompleteError> {
        if self.escaped {
            self.escaped = false;
            self.content.push(c);
            return Ok(());
        }
        match Token::classify(c) {
            Token::Escape => {
                self.escaped = true;
                self.content.push(c);
                Ok(())
            }
            Token::Quote => self.close_string(c),
            _ => {
                self.content.push(c);
                Ok(())
            }
        }
    }

    fn open_container(&mut self, c: char, open: Token, close: Token) {
        let pos = self.content.len();
        self.content.push(c);
        if self.parse_state() == ParseState::AwaitingValue {
            self.drop_null_placeholder();
        }
        self.tokens.push(open);
        self.mirror.push(close);
        self.record(pos, c, "container opened");
    }

    fn close_container(&mut self, c: char, close: Token) -> Result<(), CompleteError> {
        let pos = self.content.len();
        self.content.push(c);
        self.tokens.push(close);
        if self.mirror.top() == Some(close) {
            self.mirror.pop();
            self.record(pos, c, "container closed");
            Ok(())
        } else {
            Err(CompleteError::new(
                CompleteErrorKind::StructuralMismatch { found: c },
                pos,
            ))
        }
    }

    fn open_string(&mut self, c: char) -> Result<(), CompleteError> {
        let pos = self.content.len();
        self.content.push(c);
        self.tokens.push(Token::Quote);
        match self.parse_state() {
            ParseState::InObject => {
                // Key position: the value that will follow is unknown, so a
                // speculative `null` goes in along with the key closer and
                // the colon.
                self.mirror.push(Token::Letter(Letter::L));
                self.mirror.push(Token::Letter(Letter::L));
                self.mirror.push(Token::Letter(Letter::U));
                self.mirror.push(Token::Letter(Letter::N));
                self.mirror.push(Token::Colon);
                self.mirror.push(Token::Quote);
                self.record(pos, c, "key opened, null value assumed");
                Ok(())
            }
            ParseState::AwaitingValue => {
                // The value turned out to be a string, not the assumed null.
                self.drop_null_placeholder();
                self.mirror.push(Token::Quote);
                self.record(pos, c, "value string opened");
                Ok(())
            }
            ParseState::InArray => {
                self.mirror.push(Token::Quote);
                self.record(pos, c, "element string opened");
                Ok(())
            }
            _ => Err(CompleteError::new(
                CompleteErrorKind::InvalidQuoteContext,
                pos,
            )),
        }
    }

    fn close_string(&mut self, c: char) -> Result<(), CompleteError> {
        let pos = self.content.len();
        self.content.push(c);
        self.tokens.push(Token::Quote);
        match self.parse_state() {
            ParseState::InObjectKey => {
                self.mirror.pop();
                self.record(pos, c, "key closed");
                Ok(())
            }
            ParseState::InObjectValue => {
                self.mirror.pop();
                self.record(pos, c, "value string closed");
                Ok(())
            }
            ParseState::InArrayElement => {
                self.mirror.pop();
                self.record(pos, c, "element string closed");
                Ok(())
            }
            _ => Err(CompleteError::new(
                CompleteErrorKind::InvalidQuoteContext,
                pos,
            )),
        }
    }

    fn colon(&mut self, c: char) {
        let pos = self.content.len();
        self.content.push(c);
        self.tokens.push(Token::Colon);
        if self.mirror.top() == Some(Token::Colon) {
            self.mirror.pop();
            self.record(pos, c, "colon satisfied");
        }
    }

    fn dot(&mut self, c: char) {
        let pos = self.content.len();
        let after_digit = self
            .content
            .as_bytes()
            .last()
            .is_some_and(u8::is_ascii_digit);
        self.content.push(c);
        if after_digit {
            self.tokens.push(Token::Dot);
            self.record(pos, c, "number ends in decimal point");
        }
    }

    fn other(&mut self, c: char) {
        let pos = self.content.len();
        if c.is_ascii_digit() && self.tokens.top() == Some(Token::Dot) {
            // The fraction continued; no repair owed anymore.
            self.tokens.pop();
        }
        if (c.is_ascii_digit() || c == '-') && self.parse_state() == ParseState::AwaitingValue {
            self.drop_null_placeholder();
            self.record(pos, c, "number begins, null hypothesis dropped");
        }
        self.content.push(c);
    }

    fn letter(&mut self, c: char, l: Letter) {
        let pos = self.content.len();
        self.content.push(c);

        // A keyword in progress accepts exactly its next letter; anything
        // else is plain passthrough, already echoed above.
        if let Some(mut run) = self.literal {
            if run.expected() == Some(l) {
                self.tokens.push(Token::Letter(l));
                self.mirror.pop();
                run.advance();
                self.literal = if run.is_done() { None } else { Some(run) };
                self.record(pos, c, "keyword letter confirmed");
            }
            return;
        }

        match self.parse_state() {
            ParseState::AwaitingValue => match l {
                Letter::N => {
                    // The hypothesis was right; start consuming it.
                    self.tokens.push(Token::Letter(l));
                    self.mirror.pop();
                    self.literal = Some(LiteralRun::opened(Keyword::Null));
                    self.record(pos, c, "null hypothesis confirmed");
                }
                Letter::T => self.correct_hypothesis(pos, c, Keyword::True),
                Letter::F => self.correct_hypothesis(pos, c, Keyword::False),
                _ => {}
            },
            ParseState::InArray => self.start_bare_literal(pos, c, l),
            // A keyword may also be the whole document, but only before
            // anything else was accepted.
            ParseState::AtTopLevel if self.tokens.is_empty() => {
                self.start_bare_literal(pos, c, l);
            }
            _ => {}
        }
    }

    /// The first letter unique to `true` or `false` falsifies the pending
    /// `null`: discard its stale placeholder letters and install the proven
    /// keyword's remaining suffix instead. This backtrack happens at most
    /// once per value.
    fn correct_hypothesis(&mut self, pos: usize, c: char, keyword: Keyword) {
        self.drop_null_placeholder();
        self.push_remaining(keyword);
        self.tokens.push(Token::classify(c));
        self.literal = Some(LiteralRun::opened(keyword));
        let note = match keyword {
            Keyword::True => "hypothesis corrected to true",
            _ => "hypothesis corrected to false",
        };
        self.record(pos, c, note);
    }

    /// Keyword start in a slot with no pre-installed placeholder (array
    /// element, top-level value). The first letter names the keyword, so its
    /// remaining letters go straight onto the mirror stack.
    fn start_bare_literal(&mut self, pos: usize, c: char, l: Letter) {
        let Some(keyword) = Keyword::starting_with(l) else {
            return;
        };
        self.push_remaining(keyword);
        self.tokens.push(Token::Letter(l));
        self.literal = Some(LiteralRun::opened(keyword));
        self.record(pos, c, "keyword started");
    }

    fn push_remaining(&mut self, keyword: Keyword) {
        for &l in keyword.letters()[1..].iter().rev() {
            self.mirror.push(Token::Letter(l));
        }
    }

    /// Pop the speculative keyword letters sitting on the mirror stack.
    fn drop_null_placeholder(&mut self) {
        while matches!(self.mirror.top(), Some(Token::Letter(_))) {
            self.mirror.pop();
        }
    }

    /// The narrow repair path: a value that stopped on a decimal point inside
    /// an object becomes a valid number by appending `0`. Does not generalize
    /// to arrays or the top level.
    fn tail_repair(&self) -> Option<&'static str> {
        if self.mirror.top() != Some(Token::ObjectClose) {
            return None;
        }
        match self.tokens.top()? {
            Token::Dot => Some("0"),
            _ => None,
        }
    }

    #[inline]
    fn record(&mut self, position: usize, byte: char, note: &'static str) {
        if self.opts.tracing {
            self.trace.push(TraceEvent {
                position,
                byte,
                note,
            });
        }
    }
}
