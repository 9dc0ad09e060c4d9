use itertools::Itertools;
use proconio::{input, marker::Chars, source::once::OnceSource};

pub const GRID_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Input {
    grid: Vec<Vec<char>>,
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let mut source = OnceSource::from(text);

        input! {
            from &mut source,
            grid: [Chars; GRID_SIZE],
        }

        Self { grid }
    }

    pub fn grid(&self) -> &[Vec<char>] {
        &self.grid
    }
}

/// The grid mirrored top to bottom.
pub fn flipped(input: &Input) -> Vec<Vec<char>> {
    let mut grid = input.grid.clone();
    grid.reverse();
    grid
}

pub fn render(grid: &[Vec<char>]) -> String {
    grid.iter()
        .map(|row| row.iter().join(" "))
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = "abcde\nfghij\nklmno\npqrst\nuvwxy\n";

    #[test]
    fn flip_reverses_row_order() {
        let input = Input::parse(SAMPLE);
        let flipped = flipped(&input);

        assert_eq!(flipped[0], input.grid()[4]);
        assert_eq!(flipped[4], input.grid()[0]);
        assert_eq!(flipped[2], input.grid()[2]);
    }

    #[test]
    fn render_is_space_separated() {
        let input = Input::parse(SAMPLE);
        assert!(render(input.grid()).starts_with("a b c d e\nf g h i j"));
    }

    #[test]
    fn double_flip_is_identity() {
        let input = Input::parse(SAMPLE);
        let twice = {
            let mut grid = flipped(&input);
            grid.reverse();
            grid
        };

        assert_eq!(twice, input.grid());
    }
}
