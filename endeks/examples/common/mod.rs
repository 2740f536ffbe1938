use endeks_core::EndeksConnector;
use std::sync::Arc;

#[must_use]
pub fn get_connector() -> Arc<dyn EndeksConnector> {
    if std::env::var("ENDEKS_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(endeks_mock::MockConnector::new())
    } else {
        let base = std::env::var("ENDEKS_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000/api/".to_string());
        Arc::new(
            endeks_http::HttpConnector::builder(base)
                .build()
                .expect("valid base url"),
        )
    }
}
