use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone.
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

pub const SHARE_HASHTAGS: &str = "joke,akpors";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLinks {
    pub facebook: String,
    pub twitter: String,
    pub native: String,
}

impl ShareLinks {
    pub fn for_location(location: &str) -> Self {
        let encoded = utf8_percent_encode(location, URI_COMPONENT).to_string();
        Self {
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={encoded}"),
            twitter: format!("http://twitter.com/share?url={encoded}&hashtags={SHARE_HASHTAGS}"),
            native: location.to_string(),
        }
    }
}

/// Platform share capability (e.g. the Web Share API).
pub trait SharePlatform {
    fn supports_share(&self) -> bool;
    fn share(&mut self, url: &str);
}

/// Shares `link` when there is one and the platform can share. Returns
/// whether a share was started; a missing capability is not an error.
pub fn handle_native_share<P: SharePlatform>(link: Option<&str>, platform: &mut P) -> bool {
    let Some(link) = link else {
        return false;
    };
    if !platform.supports_share() {
        return false;
    }
    platform.share(link);
    true
}
