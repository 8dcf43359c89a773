//! 모든 세션에 기본 등록되는 `quit`/`help` 명령.

use anyhow::Result;

use crate::application::console::Console;
use crate::application::registry::Registry;
use crate::domain::command::{ArgMode, Flow};

pub const QUIT_DESCRIPTION: &str = "Exits the utility";
pub const HELP_DESCRIPTION: &str = "Displays help on available commands";

pub const DEFAULT_TAB_LENGTH: usize = 8;
pub const DEFAULT_MAX_TABS: usize = 3;
/// 설정 값과 관계없이 설명 열이 넘지 않는 위치.
pub const MAX_TAB_STOP: usize = 120;

pub const HELP_HEADER: &str = "Available commands (extended):";

/// help 출력의 설명 열 정렬 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpLayout {
    pub tab_length: usize,
    pub max_tabs: usize,
}

impl Default for HelpLayout {
    fn default() -> Self {
        Self {
            tab_length: DEFAULT_TAB_LENGTH,
            max_tabs: DEFAULT_MAX_TABS,
        }
    }
}

impl HelpLayout {
    /// 설명이 시작되는 열. `2..=MAX_TAB_STOP` 범위로 제한된다.
    pub fn tab_stop(&self) -> usize {
        self.tab_length
            .saturating_mul(self.max_tabs)
            .clamp(2, MAX_TAB_STOP)
    }

    /// 이름을 오른쪽 정렬해 `"<name>: <description>"`의 설명이 탭 위치에서 시작하게 만든다.
    pub fn render_line(&self, name: &str, description: &str) -> String {
        let width = self.tab_stop() - 2;
        format!("{name:>width$}: {description}")
    }
}

/// 내장 명령을 등록한다.
pub fn register_builtins<C: 'static>(registry: &mut Registry<C>, layout: HelpLayout) {
    registry
        .register("quit", ArgMode::None, QUIT_DESCRIPTION, quit)
        .register(
            "help",
            ArgMode::None,
            HELP_DESCRIPTION,
            move |console: &mut Console<'_>, _: &mut C, _: Option<&str>| help(console, layout),
        );
}

/// 세션 종료 신호만 돌려준다.
pub fn quit<C>(_console: &mut Console<'_>, _context: &mut C, _argument: Option<&str>) -> Result<Flow> {
    Ok(Flow::Terminate)
}

/// 등록된 모든 명령을 등록 순서대로 출력한다.
pub fn help(console: &mut Console<'_>, layout: HelpLayout) -> Result<Flow> {
    console.comment(HELP_HEADER)?;
    for spec in console.commands() {
        console.writeln(&layout.render_line(&spec.name, &spec.description))?;
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::context::{Context, MapContext};
    use crate::infrastructure::adapters::{BufferOutput, ScriptedReader};
    use serde_json::json;

    #[test]
    fn test_render_line_aligns_at_tab_stop() {
        let layout = HelpLayout::default();
        let short = layout.render_line("set", "sets a value");
        let long = layout.render_line("help", HELP_DESCRIPTION);

        assert!(short.ends_with("set: sets a value"));
        assert_eq!(short.find("sets a value"), Some(24));
        assert_eq!(long.find(HELP_DESCRIPTION), Some(24));
    }

    #[test]
    fn test_render_line_wide_name_pushes_description() {
        let layout = HelpLayout {
            tab_length: 2,
            max_tabs: 2,
        };
        assert_eq!(layout.render_line("longname", "x"), "longname: x");
    }

    #[test]
    fn test_quit_terminates_regardless_of_context() {
        let mut registry: Registry<MapContext> = Registry::new();
        register_builtins(&mut registry, HelpLayout::default());

        let mut reader = ScriptedReader::new(Vec::<String>::new());
        let mut output = BufferOutput::default();
        let mut console = Console::new(&mut reader, &mut output, registry.specs());
        let mut context = MapContext::new();
        context.set("dirty", json!(true));

        let quit = registry.lookup("quit").unwrap();
        let flow = quit.invoke(&mut console, &mut context, None).unwrap();
        assert_eq!(flow, Flow::Terminate);
        assert!(context.has("dirty"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_help_lists_commands_in_order() {
        let mut registry: Registry<MapContext> = Registry::new();
        register_builtins(&mut registry, HelpLayout::default());
        registry.register("set", ArgMode::Required, "sets a value", |_, _, _| {
            Ok(Flow::Continue)
        });

        let mut reader = ScriptedReader::new(Vec::<String>::new());
        let mut output = BufferOutput::default();
        let mut context = MapContext::new();
        {
            let mut console = Console::new(&mut reader, &mut output, registry.specs());
            let help = registry.lookup("help").unwrap();
            let flow = help.invoke(&mut console, &mut context, None).unwrap();
            assert_eq!(flow, Flow::Continue);
        }

        let lines = output.plain_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("quit: Exits the utility"));
        assert!(lines[1].ends_with("help: Displays help on available commands"));
        assert!(lines[2].ends_with("set: sets a value"));
        assert_eq!(output.comments(), vec![HELP_HEADER]);
        assert!(context.is_empty());
    }

    #[test]
    fn test_tab_stop_is_bounded() {
        let huge = HelpLayout {
            tab_length: usize::MAX,
            max_tabs: 2,
        };
        assert_eq!(huge.tab_stop(), MAX_TAB_STOP);
        assert!(huge.render_line("set", "x").ends_with("set: x"));
        assert_eq!(huge.render_line("set", "x").len(), MAX_TAB_STOP + 1);

        let zero = HelpLayout {
            tab_length: 0,
            max_tabs: 3,
        };
        assert_eq!(zero.tab_stop(), 2);
        assert_eq!(zero.render_line("set", "x"), "set: x");
    }
}
