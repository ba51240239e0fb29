/// Hands out the synthetic ids Kotatsu entries are keyed by.
///
/// Ids are positive and sequential, starting at 1. Keep one sequence per
/// output archive; ids from different sequences collide.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: i64,
}
impl IdSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: i64) -> Self {
        Self { next: first }
    }

    /// The id the next call to [`IdSequence::next_id`] returns.
    pub fn peek(&self) -> i64 {
        self.next
    }

    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
