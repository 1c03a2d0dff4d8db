use crate::config::QrConfig;

/// URL of a rendered QR code image for `data`. The image itself is fetched by
/// the browser; nothing is rendered locally.
pub fn build_qr_url(config: &QrConfig, data: &str) -> String {
    format!(
        "{}?size={size}x{size}&data={}",
        config.base_url,
        urlencoding::encode(data),
        size = config.size
    )
}
