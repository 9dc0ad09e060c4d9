use std::collections::BTreeMap;

use proconio::{input, source::once::OnceSource};

#[derive(Debug, Clone)]
pub struct Input {
    quota: i64,
    offers: Vec<(i64, i64)>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            quota: i64,
            m: usize,
            offers: [(i64, i64); m],
        }

        Self { quota, offers }
    }
}

/// Cheapest way to buy `quota` units: pool each farmer's supply by unit
/// price, then drain the pools in price order.
pub fn solve(input: &Input) -> i64 {
    let mut by_price: BTreeMap<i64, i64> = BTreeMap::new();

    for &(price, amount) in &input.offers {
        *by_price.entry(price).or_insert(0) += amount;
    }

    let mut need = input.quota;
    let mut cost = 0;

    for (&price, &amount) in &by_price {
        if need <= 0 {
            break;
        }

        if need >= amount {
            need -= amount;
            cost += price * amount;
        } else {
            cost += price * need;
            need = 0;
        }
    }

    cost
}
