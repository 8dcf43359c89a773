//! `loopcmd` 바이너리가 실행하는 키/값 쉘 루프.

use anyhow::{Result, bail};
use serde_json::Value;
use tracing::debug;

use crate::application::console::Console;
use crate::application::registry::Registry;
use crate::application::session::LoopProgram;
use crate::domain::command::{ArgMode, Flow};
use crate::domain::context::{Context, MapContext};

/// `set`/`get`/`unset`/`list` 명령으로 컨텍스트를 다루는 루프.
#[derive(Debug, Clone, Default)]
pub struct KeyValueShell {
    seeds: Vec<(String, Value)>,
}

impl KeyValueShell {
    /// 첫 프롬프트 전에 컨텍스트에 넣을 값을 받는다.
    pub fn new(seeds: Vec<(String, Value)>) -> Self {
        Self { seeds }
    }
}

impl LoopProgram for KeyValueShell {
    type Context = MapContext;

    fn configure(&self, registry: &mut Registry<MapContext>) {
        registry
            .register("set", ArgMode::Required, "sets a value", set)
            .register("get", ArgMode::Required, "prints a value", get)
            .register("unset", ArgMode::Required, "removes a value", unset)
            .register("list", ArgMode::Optional, "lists stored values", list);
    }

    fn initialize(&self, _console: &mut Console<'_>, context: &mut MapContext) -> Result<()> {
        for (key, value) in &self.seeds {
            context.set(key, value.clone());
        }
        if !self.seeds.is_empty() {
            debug!(count = self.seeds.len(), "seeded context");
        }
        Ok(())
    }
}

/// `key=value` 텍스트를 해석한다. 값은 JSON으로 읽고, 실패하면 문자열로 둔다.
pub fn parse_assignment(text: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = text.split_once('=') else {
        bail!("expected key=value, got \"{}\"", text.trim());
    };

    let key = key.trim();
    if key.is_empty() {
        bail!("missing key in \"{}\"", text.trim());
    }

    let raw = raw.trim();
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn set(_console: &mut Console<'_>, context: &mut MapContext, argument: Option<&str>) -> Result<Flow> {
    let (key, value) = parse_assignment(argument.unwrap_or_default())?;
    context.set(&key, value);
    Ok(Flow::Continue)
}

fn get(console: &mut Console<'_>, context: &mut MapContext, argument: Option<&str>) -> Result<Flow> {
    let key = argument.unwrap_or_default().trim();
    match context.get(key) {
        Some(value) => console.writeln(&format!("{key} = {value}"))?,
        None => console.writeln(&format!("{key} is not set"))?,
    }
    Ok(Flow::Continue)
}

fn unset(_console: &mut Console<'_>, context: &mut MapContext, argument: Option<&str>) -> Result<Flow> {
    let key = argument.unwrap_or_default().trim();
    if context.delete(key).is_none() {
        bail!("no value stored under \"{key}\"");
    }
    Ok(Flow::Continue)
}

fn list(console: &mut Console<'_>, context: &mut MapContext, argument: Option<&str>) -> Result<Flow> {
    let prefix = argument.map(str::trim).unwrap_or_default();
    let entries: Vec<String> = context
        .iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| format!("{key} = {value}"))
        .collect();

    if entries.is_empty() {
        console.writeln("(empty)")?;
    }
    for entry in &entries {
        console.writeln(entry)?;
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::application::session::{ExitStatus, LoopSession, SessionSettings};
    use crate::infrastructure::adapters::{BufferOutput, ScriptedReader};

    fn run_shell(shell: KeyValueShell, lines: &[&str]) -> (BufferOutput, MapContext) {
        let mut session = LoopSession::new(shell, SessionSettings::default());
        let mut reader = ScriptedReader::new(lines.iter().copied());
        let mut output = BufferOutput::default();
        let mut context = session.program().new_context();
        let status = session
            .run_with_context(&mut reader, &mut output, &mut context)
            .unwrap();
        assert_eq!(status, ExitStatus::Success);
        (output, context)
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("foo=bar").unwrap(),
            ("foo".to_string(), json!("bar"))
        );
        assert_eq!(
            parse_assignment(" n = 42 ").unwrap(),
            ("n".to_string(), json!(42))
        );
        assert_eq!(
            parse_assignment("tags=[\"a\",\"b\"]").unwrap(),
            ("tags".to_string(), json!(["a", "b"]))
        );
        assert_eq!(
            parse_assignment("empty=").unwrap(),
            ("empty".to_string(), json!(""))
        );
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=1").is_err());
    }

    #[test]
    fn test_set_get_list_unset() {
        let (output, context) = run_shell(
            KeyValueShell::default(),
            &[
                "set user.name=ada",
                "set user.age=36",
                "set mode=fast",
                "get user.age",
                "list user.",
                "unset mode",
                "get mode",
                "quit",
            ],
        );

        assert!(output.errors().is_empty());
        assert_eq!(
            output.plain_lines(),
            vec![
                "user.age = 36",
                "user.age = 36",
                "user.name = \"ada\"",
                "mode is not set",
            ]
        );
        assert_eq!(context.len(), 2);
    }

    #[test]
    fn test_handler_errors_are_displayed() {
        let (output, context) = run_shell(
            KeyValueShell::default(),
            &["set nothing", "unset ghost", "list", "quit"],
        );

        let errors = output.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], "Error: expected key=value, got \"nothing\"");
        assert_eq!(errors[1], "Error: no value stored under \"ghost\"");
        assert_eq!(output.plain_lines(), vec!["(empty)"]);
        assert!(context.is_empty());
    }

    #[test]
    fn test_seeds_applied_before_first_prompt() {
        let shell = KeyValueShell::new(vec![("region".to_string(), json!("eu"))]);
        let (output, _) = run_shell(shell, &["get region"]);
        assert_eq!(output.plain_lines(), vec!["region = \"eu\""]);
    }
}
