use itertools::{Itertools, MinMaxResult};
use proconio::{input, source::once::OnceSource};

const MAX_SPREAD: i64 = 17;

#[derive(Debug, Clone)]
pub struct Input {
    heights: Vec<i64>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            n: usize,
            heights: [i64; n],
        }

        Self { heights }
    }
}

/// Cost (sum of squared height changes) to bring the hill range within 17,
/// splitting the excess as evenly as possible between raising the lowest
/// hill and cutting the highest.
pub fn solve(input: &Input) -> i64 {
    let (lo, hi) = match input.heights.iter().minmax() {
        MinMaxResult::NoElements => return 0,
        MinMaxResult::OneElement(&x) => (x, x),
        MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
    };

    let excess = hi - lo - MAX_SPREAD;
    if excess <= 0 {
        return 0;
    }

    let step = excess / 2;
    if excess % 2 == 0 {
        2 * step * step
    } else {
        step * step + (step + 1) * (step + 1)
    }
}
