//! Fixed-delay bounded retry.

use std::future::Future;
use std::time::Duration;

/// Runs `op` up to `attempts` times, sleeping `delay` between attempts.
///
/// Returns the first success, or the error of the final attempt. The same
/// combinator backs both the metadata fetch (one retry after 3s) and each
/// per-file content fetch (one retry after 2s).
pub async fn with_retry<T, E, F, Fut>(attempts: usize, delay: Duration, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    debug_assert!(attempts >= 1);
    let mut remaining = attempts.max(1);
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                remaining -= 1;
                if remaining == 0 {
                    return Err(err);
                }
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_succeeds_first_try_without_sleeping() {
        let calls = AtomicUsize::new(0);
        let result: Result<u32, &str> = with_retry(2, Duration::from_millis(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(42) }
        })
        .await;
        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fail_once_then_succeed() {
        let calls = AtomicUsize::new(0);
        let result: Result<u32, &str> = with_retry(2, Duration::from_millis(1), || {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err("transient")
                } else {
                    Ok(7)
                }
            }
        })
        .await;
        assert_eq!(result, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fail_twice_returns_last_error() {
        let calls = AtomicUsize::new(0);
        let result: Result<u32, String> = with_retry(2, Duration::from_millis(1), || {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            async move { Err(format!("attempt {attempt}")) }
        })
        .await;
        assert_eq!(result, Err("attempt 1".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
