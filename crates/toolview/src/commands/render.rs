use super::Command;
use crate::ansi::write_lines;
use crate::error::Error;
use crate::preferences::Preferences;
use eyre::Result;
use serde_json::Value;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;
use toolview_tui::ThemeLoader;
use toolview_tui::tui::widgets::formatters::FormatterRegistry;

const FALLBACK_WIDTH: usize = 80;

/// Where a render input is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    fn read(&self, stdin: &mut dyn Read) -> std::result::Result<String, Error> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                stdin
                    .read_to_string(&mut buf)
                    .map_err(|error| Error::ReadInput {
                        source_name: "stdin".to_string(),
                        error,
                    })?;
                Ok(buf)
            }
            Self::File(path) => std::fs::read_to_string(path).map_err(|error| Error::ReadInput {
                source_name: path.display().to_string(),
                error,
            }),
        }
    }
}

pub struct RenderCommand {
    pub tool: String,
    pub args: InputSource,
    pub result: Option<InputSource>,
    /// Overrides `ui.compact` from preferences when set
    pub compact: Option<bool>,
    pub width: Option<usize>,
    pub theme: Option<String>,
    pub plain: bool,
    pub preferences: Preferences,
}

impl Command for RenderCommand {
    fn execute(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let styled = !self.plain && stdout.is_terminal();
        let mut stdin = std::io::stdin().lock();
        let mut out = stdout.lock();

        self.render_to(&mut stdin, &mut out, styled, terminal_width)
            .map_err(Into::into)
    }
}

impl RenderCommand {
    /// Render the tool call into `out`. `terminal_width` is only consulted when
    /// neither the flag nor the preferences pin a width.
    pub fn render_to<W: Write>(
        &self,
        stdin: &mut dyn Read,
        out: &mut W,
        styled: bool,
        terminal_width: impl FnOnce() -> usize,
    ) -> std::result::Result<(), Error> {
        if self.args == InputSource::Stdin && self.result == Some(InputSource::Stdin) {
            return Err(Error::Config(
                "Only one of --args and --result can read from stdin".to_string(),
            ));
        }

        let args_text = self.args.read(stdin)?;
        let params = parse_args(&args_text)?;
        let result = self
            .result
            .as_ref()
            .map(|source| source.read(stdin))
            .transpose()?;

        let theme_name = self.theme.as_deref().or(self.preferences.ui.theme.as_deref());
        let theme = ThemeLoader::new().resolve(theme_name)?;

        let wrap_width = self
            .width
            .or(self.preferences.ui.wrap_width)
            .unwrap_or_else(terminal_width);

        let registry = FormatterRegistry::new(self.preferences.diff_settings());
        let formatter = registry.get(&self.tool);

        tracing::debug!(
            tool = %self.tool,
            has_result = result.is_some(),
            wrap_width,
            "Rendering tool call"
        );

        let lines = if self.compact.unwrap_or(self.preferences.ui.compact) {
            formatter.compact(&params, result.as_deref(), wrap_width, &theme)
        } else {
            formatter.detailed(&params, result.as_deref(), wrap_width, &theme)
        };

        write_lines(out, &lines, styled)?;
        Ok(())
    }
}

/// Blank input stands for "no arguments streamed yet".
fn parse_args(text: &str) -> std::result::Result<Value, Error> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| Error::InvalidArgs(e.to_string()))
}

fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .ok()
        .filter(|cols| *cols > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PAYLOAD: &str = r#"{
        "success": true,
        "assistantName": "Bot",
        "mainInstruction": "Be nice",
        "inlineOptionsInstruction": "",
        "mainOptionsInstruction": "",
        "old": {
            "assistantName": "Bot",
            "mainInstruction": "Be mean",
            "inlineOptionsInstruction": "",
            "mainOptionsInstruction": ""
        }
    }"#;

    fn command(args: InputSource, result: Option<InputSource>) -> RenderCommand {
        RenderCommand {
            tool: "upsert_system".to_string(),
            args,
            result,
            compact: None,
            width: Some(80),
            theme: None,
            plain: true,
            preferences: Preferences::default(),
        }
    }

    fn render(command: &RenderCommand, stdin: &str) -> std::result::Result<String, Error> {
        let mut out = Vec::new();
        command.render_to(&mut stdin.as_bytes(), &mut out, false, || 80)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_dash_as_stdin() {
        assert_eq!(InputSource::parse("-"), InputSource::Stdin);
        assert_eq!(
            InputSource::parse("args.json"),
            InputSource::File(PathBuf::from("args.json"))
        );
    }

    #[test]
    fn renders_diff_from_files() {
        let dir = TempDir::new().unwrap();
        let args = dir.path().join("args.json");
        let result = dir.path().join("result.json");
        std::fs::write(&args, r#"{"assistantName":"Bot","mainInstruction":"Be nice"}"#).unwrap();
        std::fs::write(&result, PAYLOAD).unwrap();

        let output = render(
            &command(InputSource::File(args), Some(InputSource::File(result))),
            "",
        )
        .unwrap();

        assert_eq!(
            output,
            "assistantName: Bot\nmainInstruction: Be meannice\ninlineOptionsInstruction: ''\n\n✓ Assistant Updated Successfully\n"
        );
    }

    #[test]
    fn reads_args_from_stdin_while_waiting() {
        let output = render(&command(InputSource::Stdin, None), "null").unwrap();
        assert_eq!(output, "Waiting for data...\n");
    }

    #[test]
    fn blank_args_mean_nothing_streamed_yet() {
        let output = render(&command(InputSource::Stdin, None), "  \n").unwrap();
        assert_eq!(output, "Waiting for data...\n");
    }

    #[test]
    fn malformed_result_renders_failure() {
        let dir = TempDir::new().unwrap();
        let args = dir.path().join("args.json");
        std::fs::write(&args, r#"{"assistantName":"Bot"}"#).unwrap();

        let output = render(
            &command(InputSource::File(args), Some(InputSource::Stdin)),
            "not json",
        )
        .unwrap();

        assert!(output.ends_with("Update failed\n"));
    }

    #[test]
    fn rejects_stdin_for_both_inputs() {
        let err = render(
            &command(InputSource::Stdin, Some(InputSource::Stdin)),
            "{}",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_invalid_json_args() {
        let err = render(&command(InputSource::Stdin, None), "{ nope").unwrap_err();
        assert!(matches!(err, Error::InvalidArgs(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");

        let err = render(&command(InputSource::File(missing), None), "").unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn compact_preference_selects_summary() {
        let mut cmd = command(InputSource::Stdin, None);
        cmd.preferences.ui.compact = true;

        let output = render(&cmd, r#"{"assistantName":"Bot"}"#).unwrap();
        assert_eq!(output, "Bot (pending)\n");
    }

    #[test]
    fn detailed_flag_overrides_compact_preference() {
        let mut cmd = command(InputSource::Stdin, None);
        cmd.preferences.ui.compact = true;
        cmd.compact = Some(false);

        let output = render(&cmd, r#"{"assistantName":"Bot"}"#).unwrap();
        assert!(output.ends_with("Update failed\n"));
        assert!(!output.contains("(pending)"));
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let mut cmd = command(InputSource::Stdin, None);
        cmd.theme = Some("does-not-exist".to_string());

        let err = render(&cmd, "{}").unwrap_err();
        assert!(matches!(err, Error::Tui(_)));
    }

    #[test]
    fn width_falls_back_to_terminal() {
        let mut cmd = command(InputSource::Stdin, None);
        cmd.width = None;

        let mut out = Vec::new();
        let mut probed = false;
        cmd.render_to(&mut "null".as_bytes(), &mut out, false, || {
            probed = true;
            80
        })
        .unwrap();
        assert!(probed);
    }
}
