//! 명령 이름 → (핸들러, 인자 모드, 설명) 레지스트리.

use std::collections::HashMap;

use anyhow::Result;

use crate::application::console::Console;
use crate::domain::command::{ArgMode, CommandSpec, Flow};

/// 등록된 명령을 실행하는 함수 타입.
pub type Handler<C> = Box<dyn Fn(&mut Console<'_>, &mut C, Option<&str>) -> Result<Flow>>;

/// 조회 결과: 명령 메타데이터와 핸들러.
pub struct CommandDescriptor<'a, C> {
    pub spec: &'a CommandSpec,
    handler: &'a Handler<C>,
}

impl<C> CommandDescriptor<'_, C> {
    pub fn invoke(
        &self,
        console: &mut Console<'_>,
        context: &mut C,
        argument: Option<&str>,
    ) -> Result<Flow> {
        (self.handler)(console, context, argument)
    }
}

/// 세션 하나가 소유하는 명령 레지스트리.
/// 나열 순서는 등록 순서를 따르고, 같은 이름을 다시 등록하면 자리는 유지한 채 덮어쓴다.
pub struct Registry<C> {
    specs: Vec<CommandSpec>,
    handlers: HashMap<String, Handler<C>>,
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Registry<C> {
    pub fn new() -> Self {
        Self {
            specs: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// 명령을 추가하거나 덮어쓴다.
    pub fn register<F>(
        &mut self,
        name: &str,
        mode: ArgMode,
        description: &str,
        handler: F,
    ) -> &mut Self
    where
        F: Fn(&mut Console<'_>, &mut C, Option<&str>) -> Result<Flow> + 'static,
    {
        let spec = CommandSpec::new(name, mode, description);
        match self.specs.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => *existing = spec,
            None => self.specs.push(spec),
        }
        self.handlers.insert(name.to_string(), Box::new(handler));
        self
    }

    pub fn lookup(&self, name: &str) -> Option<CommandDescriptor<'_, C>> {
        let spec = self.specs.iter().find(|spec| spec.name == name)?;
        let handler = self.handlers.get(name)?;
        Some(CommandDescriptor { spec, handler })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// 등록 순서대로 (이름, 설명)을 나열한다. 반복자는 복제해 다시 순회할 수 있다.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> + Clone + '_ {
        self.specs
            .iter()
            .map(|spec| (spec.name.as_str(), spec.description.as_str()))
    }

    /// 자동 완성 후보용 이름 목록.
    pub fn names(&self) -> Vec<&str> {
        self.specs.iter().map(|spec| spec.name.as_str()).collect()
    }

    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infrastructure::adapters::{BufferOutput, ScriptedReader};

    fn noop(_: &mut Console<'_>, _: &mut Vec<String>, _: Option<&str>) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let mut registry: Registry<Vec<String>> = Registry::new();
        registry
            .register("zeta", ArgMode::None, "last letter", noop)
            .register("alpha", ArgMode::Optional, "first letter", noop);

        let listed: Vec<(&str, &str)> = registry.list().collect();
        assert_eq!(listed, vec![("zeta", "last letter"), ("alpha", "first letter")]);

        // 반복자는 다시 시작할 수 있다.
        let listing = registry.list();
        assert_eq!(listing.clone().count(), 2);
        assert_eq!(listing.count(), 2);
    }

    #[test]
    fn test_reregister_overwrites_in_place() {
        let mut registry: Registry<Vec<String>> = Registry::new();
        registry
            .register("a", ArgMode::None, "first", noop)
            .register("b", ArgMode::None, "second", noop)
            .register("a", ArgMode::Required, "replaced", |_, log, arg| {
                log.push(arg.unwrap_or_default().to_string());
                Ok(Flow::Continue)
            });

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["a", "b"]);

        let descriptor = registry.lookup("a").unwrap();
        assert_eq!(descriptor.spec.mode, ArgMode::Required);
        assert_eq!(descriptor.spec.description, "replaced");

        let mut reader = ScriptedReader::new(Vec::<String>::new());
        let mut output = BufferOutput::default();
        let mut console = Console::new(&mut reader, &mut output, registry.specs());
        let mut log = Vec::new();
        descriptor
            .invoke(&mut console, &mut log, Some("payload"))
            .unwrap();
        assert_eq!(log, vec!["payload".to_string()]);
    }

    #[test]
    fn test_lookup_missing() {
        let registry: Registry<Vec<String>> = Registry::default();
        assert!(registry.lookup("nope").is_none());
        assert!(!registry.contains("nope"));
        assert!(registry.is_empty());
    }
}
