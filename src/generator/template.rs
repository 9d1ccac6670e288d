/// One piece of a segmented block template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Segment {
    /// Literal text emitted verbatim.
    Text(String),
    /// A `%N` placeholder, holding the zero-based argument slot index.
    Arg(usize),
}

/// Splits a display/code template on `%N` placeholders, preserving the
/// literal text between them. `%%` escapes a literal percent sign, and a
/// lone `%` without digits is kept as text.
pub(super) fn segment(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            text.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                text.push('%');
            }
            Some(d) if d.is_ascii_digit() => {
                let mut number = 0usize;
                while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                    chars.next();
                    // Pasted templates can carry arbitrary digit runs;
                    // saturate instead of overflowing.
                    number = number
                        .saturating_mul(10)
                        .saturating_add(d as usize - '0' as usize);
                }
                if number == 0 {
                    // %0 is not a valid placeholder; keep it as text.
                    text.push_str("%0");
                    continue;
                }
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Arg(number - 1));
            }
            _ => text.push('%'),
        }
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(segment("Nil"), vec![text("Nil")]);
    }

    #[test]
    fn placeholders_split_in_order() {
        assert_eq!(
            segment("%1!(%2)"),
            vec![Segment::Arg(0), text("!("), Segment::Arg(1), text(")")]
        );
    }

    #[test]
    fn multi_digit_placeholders() {
        assert_eq!(segment("%12"), vec![Segment::Arg(11)]);
    }

    #[test]
    fn escaped_percent_stays_literal() {
        // The path-map block renders a literal percent before its argument.
        assert_eq!(segment("%%%1"), vec![text("%"), Segment::Arg(0)]);
    }

    #[test]
    fn oversized_placeholder_saturates_instead_of_overflowing() {
        assert_eq!(
            segment("%99999999999999999999"),
            vec![Segment::Arg(usize::MAX - 1)]
        );
    }

    #[test]
    fn trailing_and_lone_percent() {
        assert_eq!(segment("a%"), vec![text("a%")]);
        assert_eq!(segment("%x"), vec![text("%x")]);
        assert_eq!(segment("%0"), vec![text("%0")]);
    }
}
