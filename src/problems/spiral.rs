use itertools::Itertools;

pub const GRID_SIZE: usize = 10;

const WINDOW_X: i32 = 1;
const WINDOW_Y: i32 = 10;
const MARK: i32 = 10;

/// Walk a square spiral out from the origin and mark every visited cell that
/// falls both inside the `WINDOW_X` x `WINDOW_Y` window and on the grid.
pub fn solve() -> Vec<Vec<i32>> {
    let mut grid = vec![vec![0; GRID_SIZE]; GRID_SIZE];

    let (mut x, mut y) = (0i32, 0i32);
    let (mut dx, mut dy) = (0i32, -1i32);
    let side = WINDOW_X.max(WINDOW_Y);

    for _ in 0..side * side {
        let in_window = -WINDOW_X / 2 <= x
            && x <= WINDOW_X / 2
            && -WINDOW_Y / 2 <= y
            && y <= WINDOW_Y / 2;
        let on_grid = (0..GRID_SIZE as i32).contains(&x) && (0..GRID_SIZE as i32).contains(&y);

        if in_window && on_grid {
            grid[x as usize][y as usize] = MARK;
        }

        if x == y || (x < 0 && x == -y) || (x > 0 && x == 1 - y) {
            (dx, dy) = (-dy, dx);
        }

        x += dx;
        y += dy;
    }

    grid
}

pub fn render(grid: &[Vec<i32>]) -> String {
    grid.iter()
        .map(|row| row.iter().join(" "))
        .join("\n")
}
