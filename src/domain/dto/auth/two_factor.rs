//! 2단계 인증 요청 DTO

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

/// 인증 앱이 생성하는 6자리 숫자 코드
static TOTP_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// 공백이 아닌 문자가 하나 이상
static NON_BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S").unwrap());

/// 2단계 인증 설정 변경 전 비밀번호 재확인 (설정/해제)
#[derive(Debug, Deserialize, Validate)]
pub struct PasswordConfirmation {
    #[validate(regex(path = *NON_BLANK, message = "Password is required to change two-factor settings"))]
    #[serde(default)]
    pub password: String,
}

/// 2단계 인증 활성화 코드 제출
#[derive(Debug, Deserialize, Validate)]
pub struct TwoFactorCodeRequest {
    #[validate(regex(path = *TOTP_CODE, message = "Enter the 6-digit code from your authenticator app"))]
    #[serde(default)]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: &str) -> TwoFactorCodeRequest {
        TwoFactorCodeRequest { code: value.to_string() }
    }

    #[test]
    fn test_six_digit_code_is_accepted() {
        assert!(code("123456").validate().is_ok());
        assert!(code("000000").validate().is_ok());
    }

    #[test]
    fn test_malformed_codes_are_rejected() {
        for value in ["", "12345", "1234567", "12a456", " 123456", "123 456", "１２３４５６"] {
            assert!(code(value).validate().is_err(), "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_password_confirmation_requires_value() {
        assert!(PasswordConfirmation { password: String::new() }.validate().is_err());
        assert!(PasswordConfirmation { password: "   ".to_string() }.validate().is_err());
        assert!(PasswordConfirmation { password: "hunter22".to_string() }.validate().is_ok());
    }
}
