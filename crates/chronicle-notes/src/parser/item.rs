//! Item extraction: `<change> by @<author> in <url>` → [`ChangeRecord`]

use chronicle_core::ItemParseError;
use url::Url;

use crate::types::ChangeRecord;

/// Literal separating the description from the author handle
pub const AUTHOR_MARKER: &str = " by @";

/// Literal separating the author handle from the pull request URL
pub const LINK_MARKER: &str = " in ";

/// Parse one raw release note item.
///
/// The description runs up to the last ` by @`; the author runs up to the
/// following ` in `; the rest is the pull request URL, whose final path
/// segment must be the PR number.
pub fn parse_item(raw: &str) -> Result<ChangeRecord, ItemParseError> {
    let (description, rest) = raw
        .rsplit_once(AUTHOR_MARKER)
        .ok_or(ItemParseError::MissingAuthor)?;
    let (author, link) = rest
        .split_once(LINK_MARKER)
        .ok_or(ItemParseError::MissingLink)?;

    let description = description.trim();
    if description.is_empty() {
        return Err(ItemParseError::EmptyDescription);
    }

    if author.is_empty() || author.chars().any(char::is_whitespace) {
        return Err(ItemParseError::InvalidAuthor(author.to_string()));
    }

    let link = link.trim();
    let pr_number = pr_number_from_url(link)?;

    Ok(ChangeRecord::new(description, pr_number, link))
}

fn pr_number_from_url(link: &str) -> Result<String, ItemParseError> {
    let url = Url::parse(link).map_err(|e| ItemParseError::InvalidUrl {
        url: link.to_string(),
        reason: e.to_string(),
    })?;

    let last_segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .ok_or_else(|| ItemParseError::InvalidUrl {
            url: link.to_string(),
            reason: "URL has no path".to_string(),
        })?;

    if last_segment.is_empty() || !last_segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ItemParseError::MissingPrNumber(link.to_string()));
    }

    Ok(last_segment.to_string())
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
