use proconio::{input, source::once::OnceSource};

#[derive(Debug, Clone)]
pub struct Input {
    heights: Vec<i64>,
    pours: Vec<i64>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            n: usize,
            m: usize,
            heights: [i64; n],
            pours: [i64; m],
        }

        Self { heights, pours }
    }
}

/// Each pour of `x` units raises vessels left to right. A vessel takes up to
/// its current height, and the pour stops once the running total reaches `x`.
pub fn solve(input: &Input) -> Vec<i64> {
    let mut heights = input.heights.clone();

    for &x in &input.pours {
        let mut poured = 0;

        for h in heights.iter_mut() {
            if poured >= x {
                break;
            }

            if poured < *h {
                let take = if x > *h { *h - poured } else { x - poured };
                *h += take;
                poured += take;
            }
        }
    }

    heights
}
