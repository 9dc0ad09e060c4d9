use anyhow::Result;
use training_archive::io;
use training_archive::problems::beads;

fn main() -> Result<()> {
    let text = io::load_task_input("beads")?;
    let input = beads::Input::parse(&text);

    io::write_task_output("beads", &format!("{}\n", beads::solve(&input)))
}
