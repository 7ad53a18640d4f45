//! 리다이렉트 대상 정제 및 URL 조립 유틸리티
//!
//! 사용자가 제공한 리다이렉트 값은 동일 출처의 경로만 허용합니다.
//! 절대 URL(`https://...`), 프로토콜 상대 URL(`//evil.example`),
//! 백슬래시 변형(`/\evil.example`)은 모두 기본값으로 대체됩니다.

/// 로그인 성공 후 기본 이동 경로
pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

/// 리다이렉트 값을 동일 출처 경로로 정제합니다.
///
/// ```rust,ignore
/// assert_eq!(sanitize_redirect(Some("/datasets?page=2"), "/dashboard"), "/datasets?page=2");
/// assert_eq!(sanitize_redirect(Some("https://evil.example"), "/dashboard"), "/dashboard");
/// ```
pub fn sanitize_redirect(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(candidate) if is_same_origin_path(candidate) => candidate.to_string(),
        _ => default.to_string(),
    }
}

fn is_same_origin_path(candidate: &str) -> bool {
    candidate.starts_with('/')
        && !candidate.starts_with("//")
        && !candidate.contains('\\')
        && !candidate.chars().any(char::is_control)
}

/// 경로에 쿼리 파라미터를 덧붙입니다. 값은 퍼센트 인코딩됩니다.
///
/// ```rust,ignore
/// let url = with_query("/login", &[("error", "Bad password"), ("unverified", "1")]);
/// assert_eq!(url, "/login?error=Bad%20password&unverified=1");
/// ```
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, query)
}

/// HTML 속성 값에 안전하게 넣을 수 있도록 이스케이프합니다.
pub fn escape_html_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
