//! 세션 동안 핸들러들이 공유하는 가변 컨텍스트 계약과 기본 구현.

use std::collections::BTreeMap;

use serde_json::Value;

/// 핸들러에 `&mut`로 전달되는 키/값 저장소 계약.
///
/// 없는 키 조회는 실패가 아니라 `None`을 돌려준다.
pub trait Context {
    fn get(&self, key: &str) -> Option<&Value>;

    fn set(&mut self, key: &str, value: Value);

    /// `null` 값이 저장된 키는 없는 것으로 본다.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_null())
    }

    fn delete(&mut self, key: &str) -> Option<Value>;
}

/// 맵 기반 기본 컨텍스트.
#[derive(Debug, Clone, Default)]
pub struct MapContext {
    values: BTreeMap<String, Value>,
}

impl MapContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 키를 정렬 순서로 반환한다.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Context for MapContext {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }
}
