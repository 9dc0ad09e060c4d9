use proconio::{input, marker::Chars, source::once::OnceSource};

#[derive(Debug, Clone)]
pub struct Input {
    cases: Vec<Case>,
}

#[derive(Debug, Clone)]
pub struct Case {
    n: usize,
    shift_col: i64,
    shift_row: i64,
    photo: Vec<Vec<char>>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            t: usize,
        }

        let mut cases = Vec::with_capacity(t);

        for _ in 0..t {
            input! {
                from &mut source,
                n: usize,
                shift_col: i64,
                shift_row: i64,
                photo: [Chars; n],
            }

            cases.push(Case {
                n,
                shift_col,
                shift_row,
                photo,
            });
        }

        Self { cases }
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }
}

fn in_grid(row: i64, col: i64, n: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < n && (col as usize) < n
}

/// Minimum number of stars consistent with a double-exposure photo, or -1 if
/// no star field could have produced it. `B` cells force a star at the
/// shifted source cell; `G` cells reuse the source cell when possible and
/// otherwise claim their own.
pub fn solve(case: &Case) -> i64 {
    let n = case.n;
    let mut used = vec![vec![false; n]; n];
    let mut stars = 0;

    for i in 0..n {
        for j in 0..n {
            if case.photo[i][j] != 'B' {
                continue;
            }

            let src_i = i as i64 - case.shift_row;
            let src_j = j as i64 - case.shift_col;

            if !in_grid(src_i, src_j, n) || case.photo[src_i as usize][src_j as usize] == 'W' {
                return -1;
            }

            used[src_i as usize][src_j as usize] = true;
            stars += 1;
        }
    }

    for i in 0..n {
        for j in 0..n {
            if case.photo[i][j] != 'G' {
                continue;
            }

            let src_i = i as i64 - case.shift_row;
            let src_j = j as i64 - case.shift_col;

            if in_grid(src_i, src_j, n) && !used[src_i as usize][src_j as usize] {
                used[src_i as usize][src_j as usize] = true;
                stars += 1;
            } else if !used[i][j] {
                used[i][j] = true;
                stars += 1;
            }
        }
    }

    stars
}
