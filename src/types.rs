// ─── Limits ─────────────────────────────────────────────────────────────────

/// Largest packet a client accepts, in bytes (20k).
pub const CLIENT_PACKET_MAX: usize = 20480;

/// Identifies one field's position entry within a handler.
pub type FieldId = usize;

// ─── Position ───────────────────────────────────────────────────────────────

/// Byte extent of one field inside the buffer that owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub length: usize,
}

impl Position {
    #[inline]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// End boundary (`offset + length`).
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// True when `other` sits after this position and has to move when
    /// this one grows or shrinks at its end.
    #[inline]
    pub(crate) fn is_followed_by(&self, other: &Position) -> bool {
        other.offset >= self.end() && (other.offset > self.offset || other.length > 0)
    }
}

// ─── Probe ──────────────────────────────────────────────────────────────────

/// Outcome of an `insert`, `remove` or `resize` request.
///
/// A rejected request is an expected condition: `feasible` carries the
/// largest amount that would have been accepted when growing, or the
/// smallest size that is reachable when shrinking, so callers can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Applied(usize),
    Rejected { feasible: usize },
}

impl Probe {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, Probe::Applied(_))
    }

    /// The applied amount on success, the feasible amount otherwise.
    #[inline]
    pub fn amount(&self) -> usize {
        match *self {
            Probe::Applied(n) => n,
            Probe::Rejected { feasible } => feasible,
        }
    }

    /// Maps the carried amount, keeping the outcome.
    #[inline]
    pub(crate) fn map(self, f: impl FnOnce(usize) -> usize) -> Probe {
        match self {
            Probe::Applied(n) => Probe::Applied(f(n)),
            Probe::Rejected { feasible } => Probe::Rejected { feasible: f(feasible) },
        }
    }
}
