use anyhow::Result;
use training_archive::io;
use training_archive::problems::friday;

fn main() -> Result<()> {
    let text = io::load_task_input("friday")?;
    let input = friday::Input::parse(&text);

    io::write_task_output("friday", &format!("{}\n", friday::solve(&input)))
}
