use anyhow::Result;
use training_archive::io;
use training_archive::problems::farmj;

fn main() -> Result<()> {
    let text = io::read_stdin()?;
    let input = farmj::Input::parse(&text);

    for reachable in farmj::solve(&input) {
        println!("{}", if reachable { "YES" } else { "NO" });
    }

    Ok(())
}
