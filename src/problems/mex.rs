use proconio::{input, source::once::OnceSource};

#[derive(Debug, Clone)]
pub struct Input {
    values: Vec<u32>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            n: usize,
            values: [u32; n],
        }

        Self { values }
    }
}

/// For each target `mex` in `0..=n`, the minimum number of element rewrites
/// so the array's MEX becomes exactly `mex`: every value below `mex` must be
/// present and every occurrence of `mex` itself must go, and one rewrite can
/// serve both ends, so the answer is `max(missing, freq[mex])`.
pub fn solve(input: &Input) -> Vec<u32> {
    let n = input.values.len();

    let mut freq = vec![0u32; n + 1];
    for &v in &input.values {
        if (v as usize) <= n {
            freq[v as usize] += 1;
        }
    }

    let mut missing = vec![0u32; n + 1];
    for i in 1..=n {
        missing[i] = missing[i - 1] + (freq[i - 1] == 0) as u32;
    }

    (0..=n).map(|mex| missing[mex].max(freq[mex])).collect()
}
