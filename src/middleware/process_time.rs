use axum::{
    middleware::Next,
    response::Response,
    http::{Request, HeaderValue},
    body::Body,
};
use std::time::{Duration, Instant};

pub const PROCESS_TIME_HEADER: &str = "x-process-time";

pub async fn process_time_middleware(
    request: Request<Body>,
    next: Next,
) -> Response {
    let start_time = Instant::now();

    let mut response = next.run(request).await;

    let process_time = format_process_time(start_time.elapsed());
    if let Ok(value) = HeaderValue::from_str(&process_time) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    response
}

fn format_process_time(duration: Duration) -> String {
    let process_time_ms = duration.as_micros() as f64 / 1000.0;

    if process_time_ms < 10.0 {
        format!("{:.1} ms", process_time_ms)
    } else {
        format!("{:.0} ms", process_time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_process_time() {
        assert_eq!(format_process_time(Duration::from_micros(300)), "0.3 ms");
        assert_eq!(format_process_time(Duration::from_micros(9_940)), "9.9 ms");
        assert_eq!(format_process_time(Duration::from_millis(1000)), "1000 ms");
        assert_eq!(format_process_time(Duration::from_micros(1_001_600)), "1002 ms");
    }
}
