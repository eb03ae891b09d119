//! # 필드 검증 규칙
//!
//! 사용자 필드에 적용되는 순수 검증 함수 모음입니다.
//! 각 함수는 상태를 갖지 않으며 서로 독립적으로 동작합니다.
//!
//! | 규칙 | 함수 | 적용 위치 |
//! |------|------|-----------|
//! | 공백 금지 | [`not_blank`] | `UserPayload` derive |
//! | 이메일 형식 | [`email_shape`] | `UserPayload` derive |
//! | 전화번호 유효성 (UA) | [`plausible_phone_number`] | `UserPayload` derive |
//! | 미래 날짜 금지 | [`past_or_present`] | `UserService::save` |
//! | 최소 나이 | [`minimum_age`] | `UserService::save` |
//!
//! "오늘"에 의존하는 날짜 규칙은 derive 대신 서비스에서 명시적으로 호출합니다.

use std::borrow::Cow;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use phonenumber::metadata::DATABASE;
use phonenumber::{country, PhoneNumber};
use regex::Regex;
use validator::ValidationError;

/// 전화번호 해석 시 사용하는 기본 지역 코드
pub const PHONE_REGION: country::Id = country::Id::UA;

/// `<local>@<domain>.<tld>` 형태의 이메일
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.+@.+\..+$").expect("email regex must compile")
});

fn failure(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// 빈 문자열이나 공백만 있는 문자열을 거부합니다.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("blank", "must not be blank"));
    }
    Ok(())
}

/// 이메일이 `<non-empty>@<non-empty>.<non-empty>` 형태인지 확인합니다.
pub fn email_shape(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_SHAPE.is_match(value) {
        return Err(failure("email", "must be a well-formed email address"));
    }
    Ok(())
}

/// 전화번호가 고정 지역(UA) 기준으로 가능한 번호인지 확인합니다.
///
/// 국제 형식(`+380...`)과 국내 형식(`067...`) 모두 허용합니다.
/// 번호 대역 할당 여부는 보지 않고, 국가 코드에 허용된 국내 번호 길이만 확인합니다.
pub fn plausible_phone_number(value: &str) -> Result<(), ValidationError> {
    let possible = phonenumber::parse(Some(PHONE_REGION), value)
        .map(|number| is_possible_length(&number))
        .unwrap_or(false);

    if !possible {
        return Err(failure("phone_number", "Invalid phone number"));
    }
    Ok(())
}

fn is_possible_length(number: &PhoneNumber) -> bool {
    let length = number.national().to_string().len();

    DATABASE
        .by_code(&number.code().value())
        .unwrap_or_default()
        .into_iter()
        .map(|metadata| metadata.descriptors().general())
        .any(|general| {
            general
                .possible_length()
                .iter()
                .chain(general.possible_local_length())
                .any(|&allowed| usize::from(allowed) == length)
        })
}

/// 날짜가 `today` 이후가 아닌지 확인합니다.
pub fn past_or_present(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date > today {
        return Err(failure("past_or_present", "must be a date in the past or in the present"));
    }
    Ok(())
}

/// `birth_date`부터 `today`까지 경과한 만 나이를 계산합니다.
///
/// `birth_date`가 미래라면 음수를 반환합니다.
pub fn full_years_between(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years
}

/// 만 나이가 `min_age` 이상인지 확인합니다.
pub fn minimum_age(
    birth_date: NaiveDate,
    today: NaiveDate,
    min_age: u32,
) -> Result<(), ValidationError> {
    let years = full_years_between(birth_date, today);
    if years < 0 || (years as u32) < min_age {
        return Err(failure(
            "under_age",
            format!("You must be at least {} years old", min_age),
        ));
    }
    Ok(())
}
