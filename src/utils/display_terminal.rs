//! 터미널 출력 포맷팅 유틸리티
//!
//! 게이트웨이 기동 시 라우팅 대상과 쿠키 정책을 눈에 띄게 출력합니다.

use crate::config::GatewaySettings;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               Synth Session Gateway              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리된 항목 수와 함께 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 들여쓰기된 트리 구조로 하위 항목을 출력합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 업스트림 대상과 세션 쿠키 정책 요약을 출력합니다
pub fn print_gateway_summary(settings: &GatewaySettings) {
    println!();
    print_boxed_title("🔐 SESSION GATEWAY READY");

    print_step_start(1, "Upstream targets");
    print_sub_task("Backend API", &settings.api_base_url);
    print_sub_task("Auth library", &settings.auth_library_url);
    print_sub_task(
        "Proxy secret",
        if settings.proxy_secret.is_some() { "configured" } else { "not set" },
    );
    print_step_complete(1, "Upstream targets", 2);

    print_step_start(2, "Session cookies");
    print_sub_task("Secure", &settings.cookies.secure.to_string());
    print_sub_task(
        "Domain",
        settings.cookies.domain.as_deref().unwrap_or("(host only)"),
    );
    print_sub_task(
        "Access max-age",
        &format!("{}s", settings.cookies.access_max_age_secs),
    );
    print_step_complete(2, "Session cookies", 3);

    let providers: Vec<&str> = settings.oauth_providers.iter().map(|p| p.as_str()).collect();
    print_step_start(3, "OAuth providers");
    print_sub_task(
        "Enabled",
        &if providers.is_empty() { "none".to_string() } else { providers.join(", ") },
    );
    print_step_complete(3, "OAuth providers", providers.len());
    println!();
}
