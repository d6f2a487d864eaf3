//! Jump counter
//!
//! Hands out tab-stop ids for one render pass. Ids start at 1 and increase by one
//! per stop in document order; a new counter is created for every render call.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpCounter {
    next: usize,
}

impl JumpCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next id
    pub fn advance(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for JumpCounter {
    fn default() -> Self {
        Self::new()
    }
}
