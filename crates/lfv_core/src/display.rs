pub const VIDEO_HOST_DOMAIN: &str = "youtube.com";
pub const PRODUCT_DOMAIN: &str = "learnfromvideo.com";

/// Rewrites an entered video URL into the product's own URL for display.
///
/// Only the first `youtube.com` is replaced; everything else is kept verbatim.
pub fn display_url(url: &str) -> String {
    url.replacen(VIDEO_HOST_DOMAIN, PRODUCT_DOMAIN, 1)
}
