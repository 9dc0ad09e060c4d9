use anyhow::Result;
use training_archive::io;
use training_archive::problems::mooin2;

fn main() -> Result<()> {
    let text = io::read_stdin()?;
    let input = mooin2::Input::parse(&text);

    println!("{}", mooin2::solve(&input));
    Ok(())
}
