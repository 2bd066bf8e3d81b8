/// Dense rank assignment with gaps (SQL `RANK()` semantics).
///
/// Ties share the rank of the first member of their group and the counter
/// keeps advancing underneath, so a tie group of size k is followed by a
/// rank gap of k: ratings 2600, 2600, 2400 rank as 1, 1, 3.
///
/// The walker only sees the entities it is fed. A walker started at a page
/// offset assigns the first entity rank offset+1 without knowing whether it
/// ties with the entity just before the window.
pub struct RankWalker {
    position: usize,
    prev_rating: Option<i32>,
    prev_rank: usize,
}

impl RankWalker {
    /// Walker re-based at a zero-based offset into the ranked order.
    pub fn starting_at(offset: usize) -> Self {
        Self {
            position: offset + 1,
            prev_rating: None,
            prev_rank: offset + 1,
        }
    }

    /// Rank for the next entity in traversal order.
    pub fn assign(&mut self, rating: i32) -> usize {
        if self.prev_rating != Some(rating) {
            self.prev_rank = self.position;
        }
        self.prev_rating = Some(rating);
        self.position += 1;
        self.prev_rank
    }
}
