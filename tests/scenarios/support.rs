use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use validation_server::clock::{Clock, Granularity, ManualClock, SystemClock};
use validation_server::config::{HarnessConfig, ServerConfig};
use validation_server::harness::Target;
use validation_server::server::{self, TargetServer};

pub fn frozen_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 3).unwrap(),
    ))
}

pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

/// Bind to port 0 and return the base URL.
pub async fn start_server(config: ServerConfig, clock: Arc<dyn Clock>) -> String {
    let target = Arc::new(TargetServer::new(&config).with_clock(clock));
    let app = server::router(target);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Harness for a frozen-clock target: short ticks, no alignment.
pub fn fast_target(base: &str) -> Target {
    let config = HarnessConfig::default()
        .with_target(base)
        .unwrap()
        .with_tick(Duration::from_millis(10));
    Target::new(config)
}

/// Harness for a real-clock target with one-second windows.
pub fn realtime_target(base: &str) -> Target {
    let config = HarnessConfig::default()
        .with_target(base)
        .unwrap()
        .with_granularity(Granularity::new(1).unwrap())
        .with_tick(Duration::from_secs(1))
        .with_align_start(true);
    Target::new(config)
}

pub fn one_second_server() -> ServerConfig {
    ServerConfig::default().with_granularity(Granularity::new(1).unwrap())
}
