use anyhow::Result;

pub mod highlight;
pub mod lines;

pub trait Command {
    fn run(&self) -> Result<()>;
}
