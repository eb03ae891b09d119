//! "오늘" 날짜를 제공하는 시계 추상화
//!
//! 생년월일 검증(미래 날짜 금지, 최소 나이)은 검증 시점의 날짜에 의존합니다.
//! 서비스는 `Clock`을 생성자로 주입받으므로 테스트에서는 고정된 날짜를 사용할 수 있습니다.

use chrono::NaiveDate;

/// 현재 날짜를 제공하는 trait
pub trait Clock: Send + Sync {
    /// 로컬 타임존 기준 오늘 날짜
    fn today(&self) -> NaiveDate;
}

/// 시스템 시간을 사용하는 기본 시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// 항상 같은 날짜를 반환하는 시계
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
