//! Video link normalisation
//!
//! Rewrites YouTube short links and watch-page links into the `/embed/` form
//! that can be placed inside an iframe. Anything else passes through untouched.

use url::form_urlencoded;

const EMBED_PREFIX: &str = "https://www.youtube.com/embed/";
const SHORT_LINK_MARKER: &str = "youtu.be/";
const WATCH_PAGE_MARKER: &str = "youtube.com/watch";
const VIDEO_PARAM: &str = "v";
const SHARE_PARAM: &str = "si";
const PATH_BOUNDARY: [char; 4] = ['?', '#', '&', '/'];

/// Convert a video URL into its embeddable form
///
/// Total and idempotent: every input yields a string, and feeding the output
/// back in returns it unchanged.
pub fn to_embed_link(link: &str) -> String {
    // Already embedded; also guards idempotence when the share value itself
    // contains one of the markers.
    if link.starts_with(EMBED_PREFIX) {
        return link.to_string();
    }

    let video_id = match link.split_once(SHORT_LINK_MARKER) {
        Some((_, rest)) => rest
            .split(|c: char| PATH_BOUNDARY.contains(&c))
            .next()
            .map(str::to_string),
        None if link.contains(WATCH_PAGE_MARKER) => query_param(link, VIDEO_PARAM),
        None => None,
    };

    let Some(video_id) = video_id.filter(|id| !id.is_empty()) else {
        return link.to_string();
    };

    let mut embed = format!("{EMBED_PREFIX}{video_id}");
    if let Some(share) = query_param(link, SHARE_PARAM) {
        embed.push('?');
        embed.push_str(
            &form_urlencoded::Serializer::new(String::new())
                .append_pair(SHARE_PARAM, &share)
                .finish(),
        );
    }
    embed
}

/// First non-empty value of a query parameter, percent-decoded
fn query_param(link: &str, name: &str) -> Option<String> {
    let without_fragment = link.split('#').next().unwrap_or(link);
    let (_, query) = without_fragment.split_once('?')?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
