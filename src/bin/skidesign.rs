use anyhow::Result;
use training_archive::io;
use training_archive::problems::skidesign;

fn main() -> Result<()> {
    let text = io::load_task_input("skidesign")?;
    let input = skidesign::Input::parse(&text);

    io::write_task_output("skidesign", &format!("{}\n", skidesign::solve(&input)))
}
