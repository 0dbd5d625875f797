/// One recorded stack transition, emitted only when `Options::tracing` is on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceEvent {
    /// Byte offset of the input byte that caused the transition.
    pub position: usize,
    /// The byte itself.
    pub byte: char,
    /// What the completer did with it.
    pub note: &'static str,
}
