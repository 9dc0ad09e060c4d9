use std::fmt::Write as _;

use anyhow::Result;
use training_archive::io;
use training_archive::problems::gift1;

fn main() -> Result<()> {
    let text = io::load_task_input("gift1")?;
    let input = gift1::Input::parse(&text);

    let mut out = String::new();
    for balance in gift1::solve(&input) {
        writeln!(out, "{}", balance)?;
    }

    io::write_task_output("gift1", &out)
}
