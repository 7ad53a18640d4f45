//! 인증 요청관련 DTO
//!
//! 로그인/회원가입 폼은 브라우저 폼(`x-www-form-urlencoded`)과 JSON 양쪽으로 들어오므로
//! 모든 필드를 `Option`으로 받고, 존재 여부 검증은 게이트웨이에서 직접 수행합니다.
//! 이렇게 해야 누락된 필드도 폼에 표시할 수 있는 메시지로 돌려줄 수 있습니다.

use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::{clean_optional_string, deserialize_optional_string};

/// 이메일/비밀번호 누락 시 메시지
pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";

/// 로그인 폼
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// 일회용 비밀번호(2단계 인증 코드)
    #[serde(default, alias = "code", deserialize_with = "deserialize_optional_string")]
    pub otp: Option<String>,

    /// 로그인 후 이동할 경로
    #[serde(default, alias = "next")]
    pub redirect: Option<String>,
}

/// 검증을 통과한 로그인 자격 증명
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub otp: Option<String>,
}

impl LoginForm {
    /// 필수 필드를 검증하여 자격 증명으로 변환합니다.
    ///
    /// 비밀번호는 공백도 유효한 문자이므로 trim 하지 않고, 비어 있는지만 확인합니다.
    pub fn credentials(&self) -> AppResult<LoginCredentials> {
        let email = self.email.clone();
        let password = self.password.clone().filter(|p| !p.trim().is_empty());

        match (email, password) {
            (Some(email), Some(password)) => Ok(LoginCredentials {
                email,
                password,
                otp: self.otp.clone(),
            }),
            _ => Err(AppError::ValidationError(CREDENTIALS_REQUIRED.to_string())),
        }
    }
}

impl LoginCredentials {
    /// 백엔드 `/auth/login` 요청 본문
    pub fn to_backend_body(&self) -> Value {
        let mut body = json!({
            "email": self.email,
            "password": self.password,
        });
        if let Some(otp) = &self.otp {
            body["otp_code"] = json!(otp);
        }
        body
    }
}

/// 회원가입 폼
#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// 표시 이름
    #[serde(default, alias = "full_name", deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default, alias = "next")]
    pub redirect: Option<String>,
}

/// 검증을 통과한 회원가입 정보
#[derive(Debug, Clone, Validate)]
pub struct RegistrationCredentials {
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub full_name: Option<String>,
}

impl RegisterForm {
    /// 필수 필드와 비밀번호 길이를 검증합니다.
    pub fn credentials(&self) -> AppResult<RegistrationCredentials> {
        let password = self.password.clone().filter(|p| !p.trim().is_empty());
        let (Some(email), Some(password)) = (self.email.clone(), password) else {
            return Err(AppError::ValidationError(CREDENTIALS_REQUIRED.to_string()));
        };

        let credentials = RegistrationCredentials {
            email,
            password,
            full_name: clean_optional_string(self.name.clone()),
        };
        credentials.validate()?;
        Ok(credentials)
    }
}

impl RegistrationCredentials {
    /// 백엔드 `/auth/register` 요청 본문
    pub fn to_backend_body(&self) -> Value {
        let mut body = json!({
            "email": self.email,
            "password": self.password,
        });
        if let Some(name) = &self.full_name {
            body["full_name"] = json!(name);
        }
        body
    }
}

/// OAuth 완료 페이지가 보내는 세션 설정 요청
#[derive(Debug, Deserialize, Validate)]
pub struct SessionEstablishRequest {
    #[validate(length(min = 1, message = "Access token is required"))]
    #[serde(default)]
    pub token: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub refresh: Option<String>,

    /// 숫자 또는 숫자 문자열
    #[serde(default)]
    pub expires_in: Option<Value>,
}

/// 이메일 인증 토큰 제출
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    #[validate(length(min = 1, message = "Verification token is required"))]
    #[serde(default)]
    pub token: String,
}

/// 인증 메일 재발송 요청
#[derive(Debug, Deserialize, Validate)]
pub struct VerificationResendRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_requires_email_and_password() {
        let missing_password = LoginForm {
            email: Some("ada@synth.example".to_string()),
            ..Default::default()
        };
        let blank_password = LoginForm {
            email: Some("ada@synth.example".to_string()),
            password: Some("   ".to_string()),
            ..Default::default()
        };
        let missing_email = LoginForm {
            password: Some("secret-pass".to_string()),
            ..Default::default()
        };

        for form in [missing_password, blank_password, missing_email] {
            match form.credentials() {
                Err(AppError::ValidationError(msg)) => assert_eq!(msg, CREDENTIALS_REQUIRED),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_login_body_includes_otp_only_when_present() {
        let form: LoginForm = serde_json::from_value(json!({
            "email": " ada@synth.example ",
            "password": "secret-pass",
            "code": "123456"
        }))
        .unwrap();
        let body = form.credentials().unwrap().to_backend_body();

        assert_eq!(body["email"], "ada@synth.example");
        assert_eq!(body["otp_code"], "123456");

        let form: LoginForm = serde_json::from_value(json!({
            "email": "ada@synth.example",
            "password": "secret-pass",
            "otp": ""
        }))
        .unwrap();
        assert!(form.credentials().unwrap().to_backend_body().get("otp_code").is_none());
    }

    #[test]
    fn test_register_rejects_short_password() {
        let form = RegisterForm {
            email: Some("ada@synth.example".to_string()),
            password: Some("short".to_string()),
            ..Default::default()
        };
        match form.credentials() {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "Password must be at least 8 characters")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_register_body_uses_full_name() {
        let form: RegisterForm = serde_json::from_value(json!({
            "email": "ada@synth.example",
            "password": "long-enough",
            "full_name": "Ada Lovelace"
        }))
        .unwrap();
        let body = form.credentials().unwrap().to_backend_body();
        assert_eq!(body["full_name"], "Ada Lovelace");
    }
}
