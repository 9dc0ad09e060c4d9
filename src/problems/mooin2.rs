use std::collections::BTreeSet;

use proconio::{input, source::once::OnceSource};

#[derive(Debug, Clone)]
pub struct Input {
    ids: Vec<usize>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            n: usize,
            ids: [usize; n],
        }

        Self { ids }
    }
}

/// Count distinct ordered pairs `(x, y)`, `x != y`, where some occurrence of
/// `x` is followed by at least two later occurrences of `y` (an `x y y`
/// pattern).
pub fn solve(input: &Input) -> usize {
    let ids = &input.ids;
    let n = ids.len();
    let mut pairs = BTreeSet::new();

    for i in 0..n {
        let mut seen_after = vec![false; n + 1];

        for j in i + 1..n {
            if seen_after[ids[j]] && ids[i] != ids[j] {
                pairs.insert((ids[i], ids[j]));
            }

            seen_after[ids[j]] = true;
        }
    }

    pairs.len()
}
