use anyhow::Result;
use training_archive::io;
use training_archive::problems::ride;

fn main() -> Result<()> {
    let text = io::load_task_input("ride")?;
    let input = ride::Input::parse(&text);

    io::write_task_output("ride", &format!("{}\n", ride::solve(&input)))
}
