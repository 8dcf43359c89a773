//! Domain layer
//! 루프 명령의 규칙(인자 모드, 입력 해석, 컨텍스트 계약)을 외부 의존성 없이 표현한다.

pub mod command;
pub mod context;
pub mod error;
pub mod input;
