use proconio::{input, source::once::OnceSource};

#[derive(Debug, Clone)]
pub struct Input {
    close: Vec<i64>,
    travel: Vec<i64>,
    queries: Vec<Query>,
}

#[derive(Debug, Clone, Copy)]
pub struct Query {
    needed: usize,
    delay: i64,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            n: usize,
            q: usize,
            close: [i64; n],
            travel: [i64; n],
            queries: [(usize, i64); q],
        }

        let queries = queries
            .into_iter()
            .map(|(needed, delay)| Query { needed, delay })
            .collect();

        Self {
            close,
            travel,
            queries,
        }
    }
}

/// A farm is reachable when arriving strictly before it closes. Each query
/// asks whether at least `needed` farms are reachable after a start delay.
pub fn solve(input: &Input) -> Vec<bool> {
    input
        .queries
        .iter()
        .map(|query| {
            let reachable = input
                .close
                .iter()
                .zip(&input.travel)
                .filter(|&(&close, &travel)| travel + query.delay < close)
                .count();

            reachable >= query.needed
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strict_closing_time() {
        let input = Input::parse("2 2\n5 10\n3 4\n2 1\n2 2\n");
        // delay 1: arrivals 4 and 5 -> both strictly early
        // delay 2: arrival 5 is not strictly before close 5
        assert_eq!(solve(&input), vec![true, false]);
    }

    #[test]
    fn zero_needed_is_always_satisfied() {
        let input = Input::parse("1 1\n1\n5\n0 100\n");
        assert_eq!(solve(&input), vec![true]);
    }
}
