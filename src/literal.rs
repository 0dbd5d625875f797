use crate::token::Letter;

/// The three reserved words, with their letter sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Null,
    True,
    False,
}

impl Keyword {
    pub fn letters(self) -> &'static [Letter] {
        match self {
            Keyword::Null => &[Letter::N, Letter::U, Letter::L, Letter::L],
            Keyword::True => &[Letter::T, Letter::R, Letter::U, Letter::E],
            Keyword::False => &[Letter::F, Letter::A, Letter::L, Letter::S, Letter::E],
        }
    }

    /// Keyword started by `letter`, if any. `n`, `t` and `f` are each unique
    /// to one keyword; every other letter is ambiguous and never starts one.
    pub fn starting_with(letter: Letter) -> Option<Self> {
        match letter {
            Letter::N => Some(Keyword::Null),
            Letter::T => Some(Keyword::True),
            Letter::F => Some(Keyword::False),
            _ => None,
        }
    }
}

/// A keyword hypothesis in progress: which word the stream is assumed to be
/// writing and how many of its letters have been confirmed. The letters still
/// owed sit on the mirror stack; this index decides which incoming letters
/// are accepted against them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LiteralRun {
    keyword: Keyword,
    matched: usize,
}

impl LiteralRun {
    /// A run whose first letter was just confirmed.
    pub fn opened(keyword: Keyword) -> Self {
        Self {
            keyword,
            matched: 1,
        }
    }

    /// The only letter that continues this run, `None` once fully matched.
    pub fn expected(&self) -> Option<Letter> {
        self.keyword.letters().get(self.matched).copied()
    }

    pub fn advance(&mut self) {
        self.matched += 1;
    }

    pub fn is_done(&self) -> bool {
        self.matched >= self.keyword.letters().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_walks_the_keyword() {
        let mut run = LiteralRun::opened(Keyword::False);
        for expected in [Letter::A, Letter::L, Letter::S, Letter::E] {
            assert!(!run.is_done());
            assert_eq!(run.expected(), Some(expected));
            run.advance();
        }
        assert!(run.is_done());
        assert_eq!(run.expected(), None);
    }

    #[test]
    fn only_n_t_f_start_a_keyword() {
        assert_eq!(Keyword::starting_with(Letter::N), Some(Keyword::Null));
        assert_eq!(Keyword::starting_with(Letter::T), Some(Keyword::True));
        assert_eq!(Keyword::starting_with(Letter::F), Some(Keyword::False));
        for l in [Letter::A, Letter::E, Letter::L, Letter::R, Letter::S, Letter::U] {
            assert_eq!(Keyword::starting_with(l), None);
        }
    }
}
