//! # 업스트림 에러 메시지 해석
//!
//! 백엔드는 에러 내용을 `detail` 필드에 담아 보냅니다. `detail`은 문자열이거나
//! 필드 에러 목록(`[{"loc": [...], "msg": "..."}]`)일 수 있으며, 목록은
//! 쉼표로 이어 붙인 하나의 메시지로 평탄화합니다.

use serde_json::Value;

/// JSON 에러 본문에서 사용자에게 보여줄 메시지를 추출합니다.
///
/// 우선순위: `detail` → `message` → `error`
///
/// ```rust,ignore
/// let body = json!({"detail": [{"msg": "field required"}, {"msg": "too short"}]});
/// assert_eq!(extract_error_message(&body).unwrap(), "field required, too short");
/// ```
pub fn extract_error_message(body: &Value) -> Option<String> {
    ["detail", "message", "error"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(flatten_detail)
}

fn flatten_detail(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(map) => map
                        .get("msg")
                        .or_else(|| map.get("message"))
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    _ => None,
                })
                .filter(|s| !s.trim().is_empty())
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Object(map) => map
            .get("msg")
            .or_else(|| map.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

/// 로그인 거부 사유가 "이메일 미인증"인지 판단합니다.
pub fn is_email_not_verified(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("not verified")
        || lower.contains("unverified")
        || lower.contains("verify your email")
        || lower.contains("email_not_verified")
}

/// 로그인 거부 사유가 "2단계 인증 코드 필요"인지 판단합니다.
pub fn is_otp_required(message: &str) -> bool {
    let lower = message.to_lowercase();
    (lower.contains("2fa") || lower.contains("two-factor") || lower.contains("otp"))
        && (lower.contains("required") || lower.contains("missing"))
}
