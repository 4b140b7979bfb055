//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수와 컨트롤러를 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증 + 디스패치 + 응답 변환   ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 컨트롤러는 `web::Data<UserController>`로 앱에 등록되고, 핸들러는 이를 추출해
//! 액션을 실행합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(UserController::with_default_validator(service)))
//!     .service(handlers::users::create_user)
//!     .service(handlers::users::update_user)
//! ```

pub mod users;
