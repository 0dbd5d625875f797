use crate::token::Token;

/// LIFO stack of tokens. Reads past the bottom return `None` instead of
/// panicking; truncated streams routinely probe deeper than what is there.
#[derive(Debug, Default, Clone)]
pub(crate) struct TokenStack {
    items: Vec<Token>,
}

impl TokenStack {
    pub fn push(&mut self, token: Token) {
        self.items.push(token);
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.items.pop()
    }

    #[inline]
    pub fn top(&self) -> Option<Token> {
        self.peek(0)
    }

    /// Peek `depth` entries below the top; `peek(0)` is the top itself.
    #[inline]
    pub fn peek(&self, depth: usize) -> Option<Token> {
        self.items
            .len()
            .checked_sub(depth + 1)
            .map(|i| self.items[i])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the stack top-to-bottom into `out`, each token as its literal
    /// text. For the mirror stack this is exactly the pending closing suffix.
    pub fn append_reversed(&self, out: &mut String) {
        for token in self.items.iter().rev() {
            out.push_str(token.text());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underflow_is_safe() {
        let mut s = TokenStack::default();
        assert_eq!(s.pop(), None);
        assert_eq!(s.top(), None);
        assert_eq!(s.peek(3), None);
    }

    #[test]
    fn peek_counts_from_top() {
        let mut s = TokenStack::default();
        s.push(Token::ObjectClose);
        s.push(Token::Colon);
        s.push(Token::Quote);
        assert_eq!(s.peek(0), Some(Token::Quote));
        assert_eq!(s.peek(1), Some(Token::Colon));
        assert_eq!(s.peek(2), Some(Token::ObjectClose));
        assert_eq!(s.peek(3), None);
    }

    #[test]
    fn reversed_render() {
        let mut s = TokenStack::default();
        s.push(Token::ObjectClose);
        s.push(Token::ArrayClose);
        s.push(Token::Quote);
        let mut out = String::new();
        s.append_reversed(&mut out);
        assert_eq!(out, "\"]}");
    }
}
