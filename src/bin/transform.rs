use anyhow::Result;
use training_archive::io;
use training_archive::problems::transform;

fn main() -> Result<()> {
    let text = io::load_task_input("transform")?;
    let input = transform::Input::parse(&text);

    println!("{}", transform::render(input.grid()));
    println!();
    println!("{}", transform::render(&transform::flipped(&input)));

    Ok(())
}
