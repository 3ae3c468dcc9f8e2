use std::sync::Once;

pub const APP_PAGE: &str = include_str!("../fixtures/app_page.html");
pub const APP_PAGE_VARIES: &str = include_str!("../fixtures/app_page_varies.html");
pub const REVIEWS_PAGE: &str = include_str!("../fixtures/reviews_page.html");

static TRACING: Once = Once::new();

/// Route extractor logs to the test harness output. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(
                "storefront_core=debug,storefront_html=debug",
            ))
            .with_test_writer()
            .try_init();
    });
}

pub fn ymd(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}
