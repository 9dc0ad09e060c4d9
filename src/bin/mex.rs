use anyhow::Result;
use training_archive::io;
use training_archive::problems::mex;

fn main() -> Result<()> {
    let text = io::read_stdin()?;
    let input = mex::Input::parse(&text);

    for ops in mex::solve(&input) {
        println!("{}", ops);
    }

    Ok(())
}
