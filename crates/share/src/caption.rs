//! Share caption and link composition.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const HASHTAGS: &str = "#GoodNaturedPup";
pub const MENTION: &str = "@goodnaturedbrand";

/// Caption posted with a shared image.
pub const CAPTION: &str =
    "Check out my pup's AI-styled make-over! 🐶✨ #GoodNaturedPup @goodnaturedbrand";

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Caption plus the image link, as copied for Instagram.
pub fn clipboard_text(image_url: &str) -> String {
    format!("{CAPTION}\n\nImage: {image_url}")
}

/// Facebook sharer link for the image with the caption as quote.
pub fn facebook_share_url(image_url: &str) -> String {
    format!(
        "{FACEBOOK_SHARER}?u={}&quote={}",
        encode_component(image_url),
        encode_component(CAPTION)
    )
}
