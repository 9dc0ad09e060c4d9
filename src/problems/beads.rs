use proconio::{input, marker::Chars, source::once::OnceSource};

#[derive(Debug, Clone)]
pub struct Input {
    beads: Vec<char>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            n: usize,
            beads: Chars,
        }

        assert_eq!(beads.len(), n);
        Self { beads }
    }
}

/// Longest stretch of beads collectible by breaking the necklace at one point
/// and gathering a same-color run from each side. White beads (`w`) count as
/// either color.
pub fn solve(input: &Input) -> usize {
    let n = input.beads.len();
    let doubled: Vec<char> = input
        .beads
        .iter()
        .chain(input.beads.iter())
        .copied()
        .collect();
    let mut best = 0;

    for start in 0..n {
        let end = start + n;
        let mut i = start;

        // First run: leading whites bind to whichever color shows up first.
        let mut color = 'w';
        while i < end && (doubled[i] == 'w' || doubled[i] == color || color == 'w') {
            if color == 'w' && doubled[i] != 'w' {
                color = doubled[i];
            }
            i += 1;
        }
        let first = i - start;

        let second_start = i;
        let mut color = 'w';
        while i < end && (doubled[i] == 'w' || doubled[i] == color || color == 'w') {
            if color == 'w' && doubled[i] != 'w' {
                color = doubled[i];
            }
            i += 1;
        }

        best = best.max(first + (i - second_start));
    }

    best.min(n)
}

#[cfg(test)]
mod test {
    use rand::Rng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn uniform(part: &[char]) -> bool {
        let mut color = None;

        for &c in part {
            if c == 'w' {
                continue;
            }

            match color {
                None => color = Some(c),
                Some(x) if x == c => {}
                _ => return false,
            }
        }

        true
    }

    /// Try every window of every length around the circle and keep the
    /// longest one splittable into two uniform runs.
    fn naive(beads: &[char]) -> usize {
        let n = beads.len();
        let mut best = 0;

        for start in 0..n {
            for len in 1..=n {
                let window: Vec<char> = (0..len).map(|k| beads[(start + k) % n]).collect();

                if (0..=len).any(|s| uniform(&window[..s]) && uniform(&window[s..])) {
                    best = best.max(len);
                }
            }
        }

        best
    }

    #[test]
    fn usaco_sample() {
        let input = Input::parse("29\nwwwbbrwrbrbrrbrbrwrwwrbwrwrrb\n");
        assert_eq!(solve(&input), 11);
    }

    #[test]
    fn all_white_is_whole_necklace() {
        let input = Input::parse("4\nwwww\n");
        assert_eq!(solve(&input), 4);
    }

    #[test]
    fn single_color_is_whole_necklace() {
        let input = Input::parse("5\nrrrrr\n");
        assert_eq!(solve(&input), 5);
    }

    #[test]
    fn matches_naive_on_random_necklaces() {
        let mut rng = Pcg64Mcg::new(42);

        for _ in 0..200 {
            let n = rng.gen_range(1..=14);
            let beads: Vec<char> = (0..n)
                .map(|_| ['r', 'b', 'w'][rng.gen_range(0..3)])
                .collect();

            let input = Input {
                beads: beads.clone(),
            };
            assert_eq!(solve(&input), naive(&beads), "necklace: {:?}", beads);
        }
    }
}
