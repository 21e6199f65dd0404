//! Small deterministic pools shared by domain tests.

use crate::domain::{QuestionPool, ZoneMap};

fn texts(prefix: &str, n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("{prefix} prompt {i}")).collect()
}

/// Five prompts in every zone.
pub fn small_pool() -> QuestionPool {
    QuestionPool::new(ZoneMap::new(
        texts("green", 5),
        texts("yellow", 5),
        texts("red", 5),
    ))
}

/// Pool with the given number of prompts per zone.
pub fn pool_with(green: usize, yellow: usize, red: usize) -> QuestionPool {
    QuestionPool::new(ZoneMap::new(
        texts("green", green),
        texts("yellow", yellow),
        texts("red", red),
    ))
}
