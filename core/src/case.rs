//! snake_case to Go identifier conversion.

/// Joins the `_`-separated segments of `text`, capitalizing the first
/// character of every segment. Empty segments contribute nothing.
///
/// With `upper_first == false` the segment at index 0 of the split is kept
/// as written, so `"user_name"` becomes `"userName"`. A leading underscore
/// moves the first word to index 1, which is then capitalized.
pub fn convert(text: &str, upper_first: bool) -> String {
    let mut output = String::with_capacity(text.len());

    for (idx, segment) in text.split('_').enumerate() {
        if segment.is_empty() {
            continue;
        }

        if idx == 0 && !upper_first {
            output.push_str(segment);
            continue;
        }

        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            output.push(single_char(first.to_uppercase(), first));
            output.push_str(chars.as_str());
        }
    }

    output
}

pub fn pascal_case(text: &str) -> String {
    convert(text, true)
}

pub fn camel_case(text: &str) -> String {
    convert(text, false)
}

/// Method receiver for a type: its first character, lowercased.
pub fn receiver(type_name: &str) -> String {
    type_name
        .chars()
        .next()
        .map(|first| single_char(first.to_lowercase(), first).to_string())
        .unwrap_or_default()
}

/// Case mappings that expand to several chars (`ß` → `SS`, `İ` → `i̇`)
/// keep the original char, so a letter always maps to one letter.
fn single_char(mut mapped: impl Iterator<Item = char>, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}
