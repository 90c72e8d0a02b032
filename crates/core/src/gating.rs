//! Peer-insight gating rule.
//!
//! A founder unlocks the peer reviews written about their submission only
//! after completing reviews for their pod-mates. The rule depends on the
//! viewer's own `reviews_completed` counter, never on how many reviews
//! they have received.

/// Reviews a member must give before peer feedback unlocks. Also the
/// received-review count at which a submission becomes `reviewed`.
pub const REVIEWS_TO_UNLOCK: i32 = 2;

/// Whether a member with the given completed-review count may see the
/// peer reviews targeting their submission.
pub fn insights_unlocked(reviews_completed: i32) -> bool {
    reviews_completed >= REVIEWS_TO_UNLOCK
}
