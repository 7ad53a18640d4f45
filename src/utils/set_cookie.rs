//! `Set-Cookie` 헤더 중계 유틸리티
//!
//! 백엔드가 API 서브도메인(`api.<parent>`)으로 발급한 쿠키를 웹 앱에서도 볼 수 있도록
//! `Domain` 속성만 공유 상위 도메인(`.<parent>`)으로 바꿉니다.
//! 나머지 속성과 값은 바이트 단위로 그대로 유지합니다.

/// `Set-Cookie` 값의 `Domain` 속성을 API 서브도메인에서 상위 도메인으로 정규화합니다.
///
/// ```rust,ignore
/// let raw = "sid=abc; Path=/; Domain=api.synth.example; HttpOnly";
/// assert_eq!(
///     rewrite_cookie_domain(raw),
///     "sid=abc; Path=/; Domain=.synth.example; HttpOnly"
/// );
/// ```
pub fn rewrite_cookie_domain(raw: &str) -> String {
    raw.split(';')
        .enumerate()
        .map(|(index, segment)| {
            // 첫 세그먼트는 name=value 이므로 속성으로 해석하지 않음
            if index == 0 {
                return segment.to_string();
            }
            rewrite_domain_segment(segment).unwrap_or_else(|| segment.to_string())
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn rewrite_domain_segment(segment: &str) -> Option<String> {
    let (key, value) = segment.split_once('=')?;
    if !key.trim().eq_ignore_ascii_case("domain") {
        return None;
    }

    let domain = value.trim().trim_start_matches('.');
    let prefix = domain.get(..4)?;
    if !prefix.eq_ignore_ascii_case("api.") {
        return None;
    }

    let parent = &domain[4..];
    // 상위 도메인이 최소 한 개의 점을 가져야 함 (api.localhost 등은 유지)
    if parent.is_empty() || !parent.contains('.') {
        return None;
    }

    let leading_ws = &segment[..segment.len() - segment.trim_start().len()];
    Some(format!("{}{}=.{}", leading_ws, key.trim(), parent))
}
