use crate::origin::MAX_ORIGIN_LENGTH;

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// An origin the controller is willing to compare against the allow-list.
///
/// Anything longer than the limit or carrying bytes outside visible ASCII is
/// rejected before matching.
pub(crate) fn is_well_formed_origin(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_ORIGIN_LENGTH
        && value.bytes().all(|byte| byte.is_ascii_graphic())
}

/// Trims entries, drops blanks and removes case-insensitive duplicates while
/// keeping the first spelling seen.
pub(crate) fn dedupe_ignore_case<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut deduped: Vec<String> = Vec::new();
    for value in values {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            continue;
        }
        if deduped
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&trimmed))
        {
            continue;
        }
        deduped.push(trimmed);
    }
    deduped
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
