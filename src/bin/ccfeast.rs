use anyhow::Result;
use training_archive::io;
use training_archive::problems::ccfeast;

fn main() -> Result<()> {
    let text = io::read_stdin()?;
    let input = ccfeast::Input::parse(&text);

    for height in ccfeast::solve(&input) {
        println!("{}", height);
    }

    Ok(())
}
