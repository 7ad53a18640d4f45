//! # 문자열 유틸리티
//!
//! 폼/JSON 입력을 정리하는 공통 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 으로 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Ada  ".to_string())), Some("Ada".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 헤더/쿠키 값 등 `&str` 입력을 정리하여 비어 있으면 None
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열, 공백 문자열, null 은 None 으로, 나머지는 trim 후 Some 으로 변환합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]` 와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Ada".to_string())), Some("Ada".to_string()));
        assert_eq!(clean_optional_string(Some("  Grace  ".to_string())), Some("Grace".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("\t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  token ")), Some("token"));
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Form {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            email: Option<String>,
        }

        let cases = [
            (r#"{"email": "  ada@synth.example  "}"#, Some("ada@synth.example")),
            (r#"{"email": ""}"#, None),
            (r#"{"email": "   "}"#, None),
            (r#"{"email": null}"#, None),
            (r#"{}"#, None),
            (r#"{"email": "  안녕하세요  "}"#, Some("안녕하세요")),
        ];
        for (json, expected) in cases {
            let form: Form = serde_json::from_str(json).unwrap();
            assert_eq!(form.email.as_deref(), expected, "input: {json}");
        }
    }
}
