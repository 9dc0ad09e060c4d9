use std::fmt::Display;

use itertools::Itertools;
use proconio::{input, source::once::OnceSource};

const MONTH_LENGTHS: [usize; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[derive(Debug, Clone, Copy)]
pub struct Input {
    years: u32,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            years: u32,
        }

        Self { years }
    }
}

/// How often the 13th of a month fell on each weekday, Saturday through
/// Friday, over `years` years starting at 1900.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCounts([u64; 7]);

impl Display for DayCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

pub fn solve(input: &Input) -> DayCounts {
    let mut counts = [0u64; 7];
    // Jan 13, 1900 was a Saturday; slot 0 is Saturday.
    let mut weekday = 0;

    for year in 1900..1900 + input.years {
        for (month, &len) in MONTH_LENGTHS.iter().enumerate() {
            counts[weekday] += 1;

            let leap = month == 1 && year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            weekday = (weekday + len + leap as usize) % 7;
        }
    }

    DayCounts(counts)
}
