use anyhow::Result;
use training_archive::io;
use training_archive::problems::astral;

fn main() -> Result<()> {
    let text = io::read_stdin()?;
    let input = astral::Input::parse(&text);

    for case in input.cases() {
        println!("{}", astral::solve(case));
    }

    Ok(())
}
