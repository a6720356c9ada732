use super::Command;
use crate::error::Error;
use eyre::Result;
use std::io::Write;
use toolview_tools::ToolSpec;
use toolview_tools::tools::upsert_system::UpsertSystemToolSpec;

pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.write_to(&mut stdout).map_err(Into::into)
    }
}

impl SchemaCommand {
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::result::Result<(), Error> {
        let schema = UpsertSystemToolSpec::schema();
        writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
        Ok(())
    }
}
