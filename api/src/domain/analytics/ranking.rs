//! Bounded top-N selection

use std::cmp::Ordering;

/// A ranking score with a total order. Floats use `f64::total_cmp`, so a
/// NaN sorts above every number instead of breaking the sort.
pub trait Score {
    fn rank_cmp(&self, other: &Self) -> Ordering;
}

impl Score for f64 {
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

macro_rules! ord_score {
    ($($t:ty),*) => {
        $(impl Score for $t {
            fn rank_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

ord_score!(i32, i64, u64, usize);

/// Return the `n` highest-scoring items, best first.
///
/// Items with equal scores keep their input order, so the output is
/// repeatable for the same input. The result has `min(n, items.len())`
/// elements.
pub fn top_n<T, S, F>(items: impl IntoIterator<Item = T>, n: usize, score: F) -> Vec<T>
where
    S: Score,
    F: Fn(&T) -> S,
{
    if n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(S, T)> = items.into_iter().map(|item| (score(&item), item)).collect();

    // `sort_by` is stable: ties stay in input order
    scored.sort_by(|(a, _), (b, _)| b.rank_cmp(a));
    scored.truncate(n);

    scored.into_iter().map(|(_, item)| item).collect()
}
