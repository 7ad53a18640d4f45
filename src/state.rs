//! 핸들러 간 공유 상태
//!
//! 시작 시 한 번 구성되며 이후에는 읽기만 합니다.
//! actix-web 의 `web::Data<AppState>` 로 모든 워커에 전달됩니다.

use std::sync::Arc;

use crate::config::GatewaySettings;
use crate::services::auth::{AuthLibraryService, CredentialService};
use crate::services::session::CookiePolicy;
use crate::services::upstream::{BackendService, HttpTransport};

pub struct AppState {
    pub settings: GatewaySettings,
    pub backend: BackendService,
    pub credentials: CredentialService,
    pub auth_library: AuthLibraryService,
    pub cookies: CookiePolicy,
}

impl AppState {
    /// 설정과 전송 계층으로 서비스들을 조립합니다.
    pub fn new(settings: GatewaySettings, transport: Arc<dyn HttpTransport>) -> Self {
        let backend = BackendService::new(
            transport.clone(),
            settings.api_base_url.clone(),
            settings.proxy_secret.clone(),
        );
        let auth_library = AuthLibraryService::new(
            transport,
            settings.auth_library_url.clone(),
            settings.public_app_url.clone(),
        );

        Self {
            credentials: CredentialService::new(backend.clone()),
            cookies: CookiePolicy::new(settings.cookies.clone()),
            backend,
            auth_library,
            settings,
        }
    }
}
