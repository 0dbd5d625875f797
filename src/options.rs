#[derive(Clone, Debug)]
pub struct Options {
    /// Apply the narrow tail repairs on `complete()`: a value ending in a
    /// decimal point inside an object gets a `0` appended. Off reproduces the
    /// raw stack dump with no repair consulted.
    pub apply_tail_repairs: bool,
    /// Record a structured trace event for every stack transition. Use
    /// `Completer::trace_events` to retrieve them. No allocation when off.
    pub tracing: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            apply_tail_repairs: true,
            tracing: false,
        }
    }
}
