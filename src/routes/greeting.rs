//! The greeting endpoint answered on the root path.

/// Fixed greeting payload served on `/`.
///
/// Byte-exact contract, including the two emoji code points: the payload
/// exercises multi-byte UTF-8 end to end through the pipeline.
pub const GREETING: &str = "Hello, CI/CD Pipeline! 😀😉";

/// Root route handler.
///
/// Responds 200 with [`GREETING`]. Nothing about the request is inspected,
/// so every invocation produces the same bytes.
pub async fn index() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handler_returns_the_payload() {
        assert_eq!(index().await, GREETING);
    }

    #[test]
    fn payload_contains_both_emoji() {
        assert!(GREETING.ends_with("😀😉"));
        // 23 ASCII bytes plus two four-byte emoji
        assert_eq!(GREETING.len(), 31);
    }
}
