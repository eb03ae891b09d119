use serde::{Deserialize, Serialize};

/// 성공 응답 envelope
///
/// 모든 성공 응답 본문은 `{"data": ...}` 형태로 감싸집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dto<T> {
    pub data: T,
}

impl<T> Dto<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
