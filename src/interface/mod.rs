//! Interface layer
//! 프로세스 진입점(CLI)과 실행 조립을 담당한다.

pub mod cli;
