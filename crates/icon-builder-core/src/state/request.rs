use std::fmt;

/// Identity of one triggered request, captured when the trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTag(u64);

impl fmt::Display for RequestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonically increasing request counter, one per controller.
///
/// A continuation may apply its result only while its tag is still
/// [`current`](RequestCounter::is_current). Any newer trigger makes every
/// older tag stale.
#[derive(Debug, Default)]
pub struct RequestCounter {
    current: u64,
}

impl RequestCounter {
    /// Issue the tag for a new trigger, superseding all earlier tags.
    pub fn issue(&mut self) -> RequestTag {
        self.current = self.current.wrapping_add(1);
        RequestTag(self.current)
    }

    /// Whether `tag` belongs to the most recent trigger.
    pub fn is_current(&self, tag: RequestTag) -> bool {
        tag.0 == self.current
    }
}
