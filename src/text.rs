use unicode_segmentation::UnicodeSegmentation;

/// Uppercase the first grapheme of `text`, leaving the rest untouched.
///
/// ```
/// assert_eq!(extenso::capitalize_first("três reais"), "Três reais");
/// ```
pub fn capitalize_first(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut out = first.to_uppercase();
            out.push_str(graphemes.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize_first("mil, quinhentos"), "Mil, quinhentos");
        assert_eq!(capitalize_first("um milhão de reais"), "Um milhão de reais");
    }

    #[test]
    fn accented_first_letter() {
        assert_eq!(capitalize_first("é"), "É");
    }

    #[test]
    fn empty() {
        assert_eq!(capitalize_first(""), "");
    }
}
