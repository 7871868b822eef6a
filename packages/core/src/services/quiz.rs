//! Quiz question picker
//!
//! Picks one question at random from a candidate pool, never returning a
//! question the player has already been served.
//!
//! Randomness is injected as an [`IndexSelector`] so tests can make the
//! choice deterministic; production code uses [`system_selector`].

use crate::models::Question;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;

/// Category id meaning "all categories"
pub const ALL_CATEGORIES: i64 = 0;

/// Chooses an index in `0..len`. Only ever called with `len > 0`.
///
/// Out-of-range results are reduced modulo `len`.
pub type IndexSelector = Arc<dyn Fn(usize) -> usize + Send + Sync>;

/// Uniform selection backed by the thread-local RNG
pub fn system_selector() -> IndexSelector {
    Arc::new(|len| rand::thread_rng().gen_range(0..len))
}

/// Outcome of a pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    /// An unseen question from the pool
    Question(Question),
    /// Every question in the pool has been served
    Exhausted,
}

impl Pick {
    pub fn into_question(self) -> Option<Question> {
        match self {
            Pick::Question(question) => Some(question),
            Pick::Exhausted => None,
        }
    }
}

/// Pick an unseen question using system randomness
pub fn pick(pool: Vec<Question>, previous_ids: &HashSet<i64>) -> Pick {
    pick_with(pool, previous_ids, &system_selector())
}

/// Pick an unseen question, delegating the random choice to `selector`
///
/// The draw is uniform over the questions whose id is not in `previous_ids`.
/// Ids in `previous_ids` that are not in the pool are ignored, so a player
/// switching categories mid-game still terminates. An empty pool is
/// `Exhausted`; callers are expected to reject that case before picking.
///
/// # Examples
///
/// ```rust
/// # use trivia_core::models::Question;
/// # use trivia_core::services::quiz::{pick_with, IndexSelector, Pick};
/// # use std::collections::HashSet;
/// # use std::sync::Arc;
/// let q = |id| Question { id, question: format!("Q{id}"), answer: "A".into(), category: 1, difficulty: 1 };
/// let first: IndexSelector = Arc::new(|_len| 0);
///
/// let seen: HashSet<i64> = [1].into_iter().collect();
/// assert_eq!(pick_with(vec![q(1), q(2)], &seen, &first), Pick::Question(q(2)));
///
/// let seen: HashSet<i64> = [1, 2].into_iter().collect();
/// assert_eq!(pick_with(vec![q(1), q(2)], &seen, &first), Pick::Exhausted);
/// ```
pub fn pick_with(
    pool: Vec<Question>,
    previous_ids: &HashSet<i64>,
    selector: &IndexSelector,
) -> Pick {
    let mut unseen: Vec<Question> = pool
        .into_iter()
        .filter(|question| !previous_ids.contains(&question.id))
        .collect();

    if unseen.is_empty() {
        return Pick::Exhausted;
    }

    let index = selector(unseen.len()) % unseen.len();
    Pick::Question(unseen.swap_remove(index))
}
