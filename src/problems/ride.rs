use std::fmt::Display;

use proconio::{input, source::once::OnceSource};

const MODULUS: u64 = 47;

#[derive(Debug, Clone)]
pub struct Input {
    comet: String,
    ufo: String,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            comet: String,
            ufo: String,
        }

        Self { comet, ufo }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Go,
    Stay,
}

impl Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Go => write!(f, "GO"),
            Decision::Stay => write!(f, "STAY"),
        }
    }
}

fn word_product(word: &str) -> u64 {
    word.bytes()
        .map(|b| (b - b'A' + 1) as u64)
        .fold(1, |acc, v| acc * v % MODULUS)
}

/// The UFO picks up the group whose name hashes to the same residue mod 47.
pub fn solve(input: &Input) -> Decision {
    if word_product(&input.comet) == word_product(&input.ufo) {
        Decision::Go
    } else {
        Decision::Stay
    }
}
