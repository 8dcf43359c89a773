//! Application layer
//! 루프 세션(레지스트리, 디스패처, 내장 명령)을 정의하고 포트를 통해 입출력을 사용한다.

pub mod builtins;
pub mod config;
pub mod console;
pub mod ports;
pub mod prompt;
pub mod registry;
pub mod session;
pub mod usecases;
