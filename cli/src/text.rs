use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `max` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Kickoff", 10), "Kickoff");
        assert_eq!(truncate_to_width("Product launch", 8), "Product…");
        assert_eq!(truncate_to_width("打ち合わせ", 5), "打ち…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
