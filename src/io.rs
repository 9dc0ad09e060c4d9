//! The two input/output shapes the archive uses: read-all-of-stdin for
//! online-judge tasks, and `<task>.in` / `<task>.out` file pairs for the
//! USACO training tasks.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

pub fn load_task_input(task: &str) -> Result<String> {
    let path = format!("{}.in", task);
    fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))
}

pub fn write_task_output(task: &str, contents: &str) -> Result<()> {
    let path = format!("{}.out", task);
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path))
}
