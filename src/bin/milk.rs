use anyhow::Result;
use training_archive::io;
use training_archive::problems::milk;

fn main() -> Result<()> {
    let text = io::load_task_input("milk")?;
    let input = milk::Input::parse(&text);

    io::write_task_output("milk", &format!("{}\n", milk::solve(&input)))
}
