use tracing_subscriber::EnvFilter;

/// 로그 필터를 읽는 환경 변수. 없으면 `RUST_LOG`, 그것도 없으면 warn.
pub const LOG_ENV: &str = "YEAST_LOG";

/// stderr 로 나가는 tracing 구독자를 설치한다. 이미 설치돼 있으면 아무것도 하지 않는다.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
