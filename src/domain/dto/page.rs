//! # 페이지 요청/결과 DTO
//!
//! 생년월일 범위 검색 결과를 일정 크기로 나누어 반환할 때 사용합니다.
//!
//! ```json
//! {
//!   "content": [ /* User */ ],
//!   "page": 0,
//!   "size": 10,
//!   "totalElements": 42,
//!   "totalPages": 5
//! }
//! ```

use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 페이지 요청 (0부터 시작하는 페이지 번호와 페이지 크기)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// 페이지 요청을 생성합니다. `size`는 1 이상이어야 합니다.
    pub fn new(page: u32, size: u32) -> Result<Self, AppError> {
        if size == 0 {
            return Err(AppError::validation("size", "Page size must not be less than one"));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// SQL `OFFSET`에 사용할 건너뛸 행 수
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// 전체 결과 중 한 페이지와 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size());
        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
            total_pages: total_elements.div_ceil(size),
        }
    }
}
