//! Client-side routes reached after a submission

/// Path of the live demo page
pub const DEMO_TRY_PATH: &str = "/demo/try";

/// `/demo/try?joinUrl=<percent-encoded url>`
pub fn demo_try_route(join_url: &str) -> String {
    format!("{DEMO_TRY_PATH}?joinUrl={}", urlencoding::encode(join_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_is_encoded() {
        assert_eq!(
            demo_try_route("https://demo.example/session/123"),
            "/demo/try?joinUrl=https%3A%2F%2Fdemo.example%2Fsession%2F123"
        );
        assert_eq!(
            demo_try_route("https://x.io/s?id=1&t=a b"),
            "/demo/try?joinUrl=https%3A%2F%2Fx.io%2Fs%3Fid%3D1%26t%3Da%20b"
        );
    }
}
