use std::fmt::Display;

use proconio::{input, source::once::OnceSource};

#[derive(Debug, Clone)]
pub struct Input {
    people: Vec<String>,
    gifts: Vec<Gift>,
}

#[derive(Debug, Clone)]
struct Gift {
    giver: String,
    money: i64,
    receivers: Vec<String>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            np: usize,
            people: [String; np],
        }

        let mut gifts = Vec::with_capacity(np);

        for _ in 0..np {
            input! {
                from &mut source,
                giver: String,
                money: i64,
                num_receivers: usize,
                receivers: [String; num_receivers],
            }

            gifts.push(Gift {
                giver,
                money,
                receivers,
            });
        }

        Self { people, gifts }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub name: String,
    pub amount: i64,
}

impl Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.amount)
    }
}

/// Net balance per person after all gifts. Each receiver gets
/// `money / receivers` rounded down; the remainder stays with the giver.
pub fn solve(input: &Input) -> Vec<Balance> {
    let index_of = |name: &str| {
        input
            .people
            .iter()
            .position(|p| p == name)
            .unwrap_or_default()
    };

    let mut balances = vec![0i64; input.people.len()];

    for gift in &input.gifts {
        let count = gift.receivers.len() as i64;
        let share = if count != 0 { gift.money / count } else { 0 };

        balances[index_of(&gift.giver)] -= share * count;

        for receiver in &gift.receivers {
            balances[index_of(receiver)] += share;
        }
    }

    input
        .people
        .iter()
        .zip(balances)
        .map(|(name, amount)| Balance {
            name: name.clone(),
            amount,
        })
        .collect()
}
