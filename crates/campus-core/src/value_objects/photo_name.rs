//! File naming for uploaded member photos

/// Build the stored file name for a member photo
///
/// `member_` + the lowercased display name with spaces turned into `_`
/// (any other character outside `[a-z0-9_-]` also becomes `_`), followed by
/// the uploaded file's extension. Two members with the same name share a file.
pub fn member_photo_file_name(display_name: &str, original_file_name: &str) -> String {
    let stem: String = display_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("member_{stem}{}", file_extension(original_file_name))
}

/// Extension including the leading dot, or empty
///
/// Leading dots of the base name do not start an extension (`.profile` has none).
/// Only ASCII alphanumerics survive so the result is always path-safe.
fn file_extension(file_name: &str) -> String {
    let base = file_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(file_name);
    let stem_start = base.len() - base.trim_start_matches('.').len();

    let Some(dot) = base[stem_start..].rfind('.') else {
        return String::new();
    };

    let ext: String = base[stem_start + dot + 1..]
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();

    if ext.is_empty() {
        String::new()
    } else {
        format!(".{ext}")
    }
}
