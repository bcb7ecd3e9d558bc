//! Elements and element identity
//!
//! Every visualized value is an [`Element`]: a payload plus an opaque id that
//! stays stable while the element moves between positions, which is what lets
//! a renderer animate a swap instead of redrawing two unrelated cells.
//!
//! Ids come from an [`IdGen`] that callers own and pass into any producer
//! that mints elements. There is deliberately no process-global counter, so
//! tests can run in isolation with deterministic ids.

/// A single visualized value with a stable identity
///
/// Within one container snapshot, all elements have distinct ids. The id is
/// never reused after the element is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub id: u64,
    pub value: i64,
}

/// One position in a fixed-capacity container: an element, or unused capacity
pub type Slot = Option<Element>;

/// Monotonic id source for elements
#[derive(Debug, Clone)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    /// Create a generator whose first id is 1
    pub fn new() -> Self {
        IdGen { next: 1 }
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Mint a fresh element carrying `value`
    pub fn element(&mut self, value: i64) -> Element {
        Element {
            id: self.next_id(),
            value,
        }
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_unique() {
        let mut ids = IdGen::new();
        let a = ids.element(10);
        let b = ids.element(10);
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn generators_are_isolated() {
        let mut first = IdGen::new();
        let mut second = IdGen::new();
        first.next_id();
        first.next_id();
        assert_eq!(second.next_id(), 1);
    }
}
