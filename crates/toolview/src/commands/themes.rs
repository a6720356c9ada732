use super::Command;
use crate::error::Error;
use eyre::Result;
use std::io::Write;
use toolview_tui::ThemeLoader;

pub struct ThemesCommand {
    pub loader: ThemeLoader,
}

impl Command for ThemesCommand {
    fn execute(&self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.write_to(&mut stdout).map_err(Into::into)
    }
}

impl ThemesCommand {
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::result::Result<(), Error> {
        for name in self.loader.list_themes() {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }
}
