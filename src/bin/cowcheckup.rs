use anyhow::Result;
use training_archive::io;
use training_archive::problems::cowcheckup;

fn main() -> Result<()> {
    let text = io::read_stdin()?;
    let input = cowcheckup::Input::parse(&text);

    for count in cowcheckup::solve(&input) {
        println!("{}", count);
    }

    Ok(())
}
