use proconio::{input, source::once::OnceSource};

#[derive(Debug, Clone)]
pub struct Input {
    a: Vec<i64>,
    b: Vec<i64>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            n: usize,
            a: [i64; n],
            b: [i64; n],
        }

        Self { a, b }
    }
}

/// For every interval `[l, r]`, reversing `a[l..=r]` leaves some number of
/// positions where `a` and `b` agree. Returns how many intervals produce each
/// agreement count `0..=n`.
pub fn solve(input: &Input) -> Vec<u64> {
    let a = &input.a;
    let b = &input.b;
    let n = a.len();

    let matches: Vec<bool> = a.iter().zip(b).map(|(x, y)| x == y).collect();
    let initial = matches.iter().filter(|&&m| m).count() as i64;

    let mut counts = vec![0u64; n + 1];

    for l in 0..n {
        // Matches at positions outside [l, r], maintained as r extends.
        let mut outside = initial;

        for r in l..n {
            if matches[r] {
                outside -= 1;
            }

            let mut agree = outside;
            let (mut i, mut j) = (l, r);

            while i <= j {
                if a[j] == b[i] {
                    agree += 1;
                }

                if i != j && a[i] == b[j] {
                    agree += 1;
                }

                if j == 0 {
                    break;
                }

                i += 1;
                j -= 1;
            }

            counts[agree as usize] += 1;
        }
    }

    counts
}

#[cfg(test)]
mod test {
    use rand::Rng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn naive(a: &[i64], b: &[i64]) -> Vec<u64> {
        let n = a.len();
        let mut counts = vec![0u64; n + 1];

        for l in 0..n {
            for r in l..n {
                let mut reversed = a.to_vec();
                reversed[l..=r].reverse();

                let agree = reversed.iter().zip(b).filter(|(x, y)| x == y).count();
                counts[agree] += 1;
            }
        }

        counts
    }

    #[test]
    fn single_element() {
        let input = Input::parse("1\n1\n1\n");
        assert_eq!(solve(&input), vec![0, 1]);
    }

    #[test]
    fn match_outside_interval_still_counts() {
        let input = Input::parse("2\n1 2\n3 2\n");
        // [0,0] -> 1 agreement, [0,1] -> 0, [1,1] -> 1
        assert_eq!(solve(&input), vec![1, 2, 0]);
    }

    #[test]
    fn matches_naive_on_random_arrays() {
        let mut rng = Pcg64Mcg::new(42);

        for _ in 0..200 {
            let n = rng.gen_range(1..=8);
            let a: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=3)).collect();
            let b: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=3)).collect();

            let input = Input {
                a: a.clone(),
                b: b.clone(),
            };
            assert_eq!(solve(&input), naive(&a, &b), "a: {:?}, b: {:?}", a, b);
        }
    }
}
