//! Stateless pattern matchers over single input lines.
//!
//! Patterns are anchored at both ends (full-line matches). The bare-keyword
//! pattern is tried before the keyword-value pattern for both name and value
//! extraction, so a lone token is a keyword with no value rather than a
//! keyword with an empty value captured by the greedy pattern.

use regex::Regex;
use std::sync::LazyLock;

/// Whitespace, then a '#', then anything.
static COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#.*$").expect("BUG: invalid COMMENT regex literal")
});

/// Whitespace, then an '&', then the section name and optional parameters.
static SECTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*&(\S+)\s?(.+)?$").expect("BUG: invalid SECTION_START regex literal")
});

/// Whitespace, then '&END', optionally followed by a section name.
static SECTION_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*&END.*$").expect("BUG: invalid SECTION_END regex literal")
});

/// Keyword name, optional bracketed unit, value, optional trailing unit.
static KEYWORD_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S+)\s*(?:\[.+\])?([\w\.\-\+\s]*)(?:\[.+\]\s*)?$")
        .expect("BUG: invalid KEYWORD_VALUE regex literal")
});

/// A single token and nothing else on the line.
static BARE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S+)\s*$").expect("BUG: invalid BARE_KEYWORD regex literal")
});

/// A bracketed unit anywhere after the keyword name.
static KEYWORD_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S+).+\[(\S+)\].*$").expect("BUG: invalid KEYWORD_UNIT regex literal")
});

pub fn is_comment(line: &str) -> bool {
    COMMENT.is_match(line)
}

pub fn is_section_start(line: &str) -> bool {
    SECTION_START.is_match(line)
}

pub fn is_section_end(line: &str) -> bool {
    SECTION_END.is_match(line)
}

/// The name token following the section-open marker.
pub fn section_name(line: &str) -> Option<&str> {
    SECTION_START
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Free-text parameters after the section name, if any.
pub fn section_parameters(line: &str) -> Option<&str> {
    SECTION_START
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// The first token on the line, ignoring any bracketed unit annotation.
pub fn keyword_name(line: &str) -> Option<&str> {
    if let Some(caps) = BARE_KEYWORD.captures(line) {
        return caps.get(1).map(|m| m.as_str());
    }
    KEYWORD_VALUE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Everything after the keyword name, with bracketed units stripped and
/// surrounding whitespace trimmed. `None` for a bare keyword line.
pub fn keyword_value(line: &str) -> Option<&str> {
    if BARE_KEYWORD.is_match(line) {
        return None;
    }
    KEYWORD_VALUE
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim())
}

pub fn keyword_has_unit(line: &str) -> bool {
    KEYWORD_UNIT.is_match(line)
}

/// The bracketed unit token, wherever it appears after the keyword name.
pub fn keyword_unit(line: &str) -> Option<&str> {
    KEYWORD_UNIT
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_lines() {
        assert!(is_comment("# a comment"));
        assert!(is_comment("   # indented"));
        assert!(!is_comment("KEY # not a comment"));
    }

    #[test]
    fn section_markers() {
        assert!(is_section_start("&GLOBAL"));
        assert!(is_section_start("  &FORCE_EVAL QS"));
        assert!(is_section_end("&END"));
        assert!(is_section_end("  &END GLOBAL"));
        // &END also matches the start pattern, so end is checked first.
        assert!(is_section_start("&END GLOBAL"));
        assert!(!is_section_start("GLOBAL"));
    }

    #[test]
    fn section_name_and_parameters() {
        assert_eq!(section_name("&FORCE_EVAL QS"), Some("FORCE_EVAL"));
        assert_eq!(section_parameters("&FORCE_EVAL QS"), Some("QS"));
        assert_eq!(section_name("  &GLOBAL"), Some("GLOBAL"));
        assert_eq!(section_parameters("  &GLOBAL"), None);
        assert_eq!(section_parameters("&KIND H O"), Some("H O"));
    }

    #[test]
    fn bare_keyword_takes_precedence() {
        assert_eq!(keyword_name("  LSD  "), Some("LSD"));
        assert_eq!(keyword_value("  LSD  "), None);
    }

    #[test]
    fn keyword_with_value() {
        assert_eq!(keyword_name("PROJECT methanol"), Some("PROJECT"));
        assert_eq!(keyword_value("PROJECT methanol"), Some("methanol"));
        assert_eq!(keyword_value("  CUTOFF 280  "), Some("280"));
    }

    #[test]
    fn unit_before_value() {
        let line = "ABC [angstrom] 10 10 10";
        assert!(keyword_has_unit(line));
        assert_eq!(keyword_unit(line), Some("angstrom"));
        assert_eq!(keyword_name(line), Some("ABC"));
        assert_eq!(keyword_value(line), Some("10 10 10"));
    }

    #[test]
    fn unit_after_value() {
        let line = "ABC 10 10 10 [angstrom]";
        assert!(keyword_has_unit(line));
        assert_eq!(keyword_unit(line), Some("angstrom"));
        assert_eq!(keyword_value(line), Some("10 10 10"));
    }

    #[test]
    fn compound_unit() {
        let line = "CUTOFF 2.4 [bohr^-1*hartree]";
        assert_eq!(keyword_unit(line), Some("bohr^-1*hartree"));
        assert_eq!(keyword_value(line), Some("2.4"));
    }

    #[test]
    fn no_unit() {
        assert!(!keyword_has_unit("CUTOFF 280"));
        assert_eq!(keyword_unit("CUTOFF 280"), None);
    }

    #[test]
    fn blank_line_is_not_a_keyword() {
        assert_eq!(keyword_name(""), None);
        assert_eq!(keyword_name("   "), None);
        assert_eq!(keyword_value(""), None);
    }

    #[test]
    fn value_with_disallowed_characters_is_not_a_keyword_line() {
        // The value pattern only admits word characters, signs, dots and
        // whitespace; a path value falls through to default content.
        assert_eq!(keyword_name("BASIS_SET_FILE_NAME ./BASIS_SET"), None);
    }
}
