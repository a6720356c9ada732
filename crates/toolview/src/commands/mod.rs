use eyre::Result;

pub mod render;
pub mod schema;
pub mod themes;

pub trait Command {
    fn execute(&self) -> Result<()>;
}
