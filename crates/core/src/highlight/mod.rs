//! Lightweight syntax highlighting for generated snippets.
//!
//! The highlighter is a single forward scan per line. The only state is whether the scan is
//! inside a string literal and which quote opened it, and that state is reset at every line
//! break: a string literal spanning lines is classified line by line, so its continuation lines
//! come out as plain text.

pub mod render;

/// Semantic class of a highlighted fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentClass {
    Plain,
    String,
    Comment,
    Keyword,
    /// An identifier from a client library API.
    Sdk,
    /// A `0x`-prefixed 20 byte hex literal.
    Address,
}

impl FragmentClass {
    /// Returns the CSS class used by the markup renderer, `None` for plain text.
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::String => Some("code-string"),
            Self::Comment => Some("code-comment"),
            Self::Keyword => Some("code-keyword"),
            Self::Sdk => Some("code-sdk"),
            Self::Address => Some("code-address"),
        }
    }
}

/// A run of source text sharing one [`FragmentClass`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub class: FragmentClass,
    /// The source text, unescaped.
    pub text: String,
}

impl Fragment {
    pub fn new(class: FragmentClass, text: impl Into<String>) -> Self {
        Self { class, text: text.into() }
    }
}

/// The fragments of a single source line. Concatenating the fragment texts yields the line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightedLine {
    pub fragments: Vec<Fragment>,
}

impl HighlightedLine {
    /// Returns true if the line has no content.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns the original source text of the line.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Appends a fragment; consecutive plain text is merged into one fragment.
    fn push(&mut self, class: FragmentClass, text: &str) {
        if class == FragmentClass::Plain
            && let Some(last) = self.fragments.last_mut()
            && last.class == FragmentClass::Plain
        {
            last.text.push_str(text);
            return;
        }
        self.fragments.push(Fragment::new(class, text));
    }

    /// Appends a character to the string fragment opened last.
    fn extend_string(&mut self, ch: char) {
        match self.fragments.last_mut() {
            Some(last) if last.class == FragmentClass::String => last.text.push(ch),
            _ => self.fragments.push(Fragment::new(FragmentClass::String, ch)),
        }
    }
}

/// Known tokens, matched in order. The first match wins.
///
/// Keywords come first, followed by identifiers from the client libraries' APIs.
pub const TOKENS: &[(&str, FragmentClass)] = &[
    ("import", FragmentClass::Keyword),
    ("from", FragmentClass::Keyword),
    ("const", FragmentClass::Keyword),
    ("let", FragmentClass::Keyword),
    ("var", FragmentClass::Keyword),
    ("return", FragmentClass::Keyword),
    ("export", FragmentClass::Keyword),
    ("default", FragmentClass::Keyword),
    ("await", FragmentClass::Keyword),
    ("async", FragmentClass::Keyword),
    ("function", FragmentClass::Keyword),
    ("new", FragmentClass::Keyword),
    ("if", FragmentClass::Keyword),
    ("else", FragmentClass::Keyword),
    ("try", FragmentClass::Keyword),
    ("catch", FragmentClass::Keyword),
    ("ethers", FragmentClass::Sdk),
    ("useReadContract", FragmentClass::Sdk),
    ("useWriteContract", FragmentClass::Sdk),
    ("useWatchContractEvent", FragmentClass::Sdk),
    ("createPublicClient", FragmentClass::Sdk),
    ("createWalletClient", FragmentClass::Sdk),
];

const LINE_COMMENT: &str = "//";

/// Highlights `source`, producing one [`HighlightedLine`] per `\n` separated line.
///
/// The result is never empty: an empty source yields a single empty line, and a trailing
/// newline yields a trailing empty line, so a line number gutter always lines up.
pub fn highlight(source: &str) -> Vec<HighlightedLine> {
    source.split('\n').map(highlight_line).collect()
}

fn highlight_line(line: &str) -> HighlightedLine {
    let mut out = HighlightedLine::default();
    // The quote character of the string literal we're in, if any.
    let mut quote: Option<char> = None;
    let mut pos = 0;

    while let Some(ch) = line[pos..].chars().next() {
        let rest = &line[pos..];

        if quote.is_none() && rest.starts_with(LINE_COMMENT) {
            out.push(FragmentClass::Comment, rest);
            break;
        }

        if is_quote(ch) {
            match quote {
                None => {
                    quote = Some(ch);
                    out.push(FragmentClass::String, &rest[..ch.len_utf8()]);
                }
                Some(open) if open == ch && !line[..pos].ends_with('\\') => {
                    out.extend_string(ch);
                    quote = None;
                }
                Some(_) => out.extend_string(ch),
            }
            pos += ch.len_utf8();
            continue;
        }

        if quote.is_some() {
            out.extend_string(ch);
            pos += ch.len_utf8();
            continue;
        }

        if let Some((token, class)) = match_token(rest) {
            out.push(class, token);
            pos += token.len();
            continue;
        }

        if let Some(address) = match_address(rest) {
            out.push(FragmentClass::Address, address);
            pos += address.len();
            continue;
        }

        out.push(FragmentClass::Plain, &rest[..ch.len_utf8()]);
        pos += ch.len_utf8();
    }

    out
}

const fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '`')
}

const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Matches a known token at the start of `rest`, requiring a word boundary after it so that
/// e.g. `import` is not found inside `importantValue`.
fn match_token(rest: &str) -> Option<(&'static str, FragmentClass)> {
    TOKENS.iter().copied().find(|(token, _)| {
        rest.strip_prefix(token).is_some_and(|after| !after.starts_with(is_word_char))
    })
}

/// Matches `0x` followed by 40 hex digits at the start of `rest`.
fn match_address(rest: &str) -> Option<&str> {
    let candidate = rest.get(..42)?;
    let digits = candidate.strip_prefix("0x")?;
    digits.bytes().all(|b| b.is_ascii_hexdigit()).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use FragmentClass::*;

    fn frags(line: &HighlightedLine) -> Vec<(FragmentClass, &str)> {
        line.fragments.iter().map(|f| (f.class, f.text.as_str())).collect()
    }

    #[test]
    fn empty_source_is_one_empty_line() {
        let lines = highlight("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn one_entry_per_line() {
        assert_eq!(highlight("a\nb").len(), 2);
        assert_eq!(highlight("a\n").len(), 2);
        assert_eq!(highlight("\n\n").len(), 3);
    }

    #[test]
    fn comments_consume_the_line() {
        let lines = highlight("// comment");
        assert_eq!(frags(&lines[0]), vec![(Comment, "// comment")]);

        let lines = highlight("x = 1 // const 'y'");
        assert_eq!(frags(&lines[0]), vec![(Plain, "x = 1 "), (Comment, "// const 'y'")]);
    }

    #[test]
    fn comment_markers_inside_strings_are_text() {
        let lines = highlight("'http://x' // c");
        assert_eq!(frags(&lines[0]), vec![(String, "'http://x'"), (Plain, " "), (Comment, "// c")]);
    }

    #[test]
    fn escaped_quotes_do_not_close_strings() {
        let lines = highlight(r#""a\"b""#);
        assert_eq!(frags(&lines[0]), vec![(String, r#""a\"b""#)]);
    }

    #[test]
    fn other_quotes_inside_strings_are_literal() {
        let lines = highlight(r#"`it's "fine"` ok"#);
        assert_eq!(frags(&lines[0]), vec![(String, r#"`it's "fine"`"#), (Plain, " ok")]);
    }

    #[test]
    fn adjacent_strings_stay_separate() {
        let lines = highlight(r#""a""b""#);
        assert_eq!(frags(&lines[0]), vec![(String, r#""a""#), (String, r#""b""#)]);
    }

    #[test]
    fn unclosed_strings_end_with_the_line() {
        let lines = highlight("'abc\nconst");
        assert_eq!(frags(&lines[0]), vec![(String, "'abc")]);
        assert_eq!(frags(&lines[1]), vec![(Keyword, "const")]);
    }

    #[test]
    fn keywords_need_a_word_boundary() {
        let lines = highlight("const importantVar = 1");
        assert_eq!(frags(&lines[0]), vec![(Keyword, "const"), (Plain, " importantVar = 1")]);

        let lines = highlight("import { x } from 'y'");
        assert_eq!(
            frags(&lines[0]),
            vec![
                (Keyword, "import"),
                (Plain, " { x } "),
                (Keyword, "from"),
                (Plain, " "),
                (String, "'y'"),
            ]
        );
    }

    #[test]
    fn sdk_identifiers() {
        let lines = highlight("useWriteContract()");
        assert_eq!(frags(&lines[0]), vec![(Sdk, "useWriteContract"), (Plain, "()")]);

        let lines = highlight("new ethers.Contract");
        assert_eq!(
            frags(&lines[0]),
            vec![(Keyword, "new"), (Plain, " "), (Sdk, "ethers"), (Plain, ".Contract")]
        );
    }

    #[test]
    fn addresses() {
        let address = "0xAaBbCcDdEeFf00112233445566778899aAbBcCdD";
        let lines = highlight(&format!("to({address})"));
        assert_eq!(frags(&lines[0]), vec![(Plain, "to("), (Address, address), (Plain, ")")]);

        // too short
        let lines = highlight("0x1234");
        assert_eq!(frags(&lines[0]), vec![(Plain, "0x1234")]);
    }

    #[test]
    fn addresses_in_strings_stay_strings() {
        let lines = highlight("'0xdAC17F958D2ee523a2206206994597C13D831ec7'");
        assert_eq!(lines[0].fragments.len(), 1);
        assert_eq!(lines[0].fragments[0].class, String);
    }

    #[test]
    fn fragments_cover_the_line() {
        let source = "const { data } = useReadContract({\n  address: '0x0', // here\n})";
        for (line, text) in highlight(source).iter().zip(source.split('\n')) {
            assert_eq!(line.text(), text);
        }
    }

    #[test]
    fn handles_non_ascii() {
        let lines = highlight("const é = 'ü' // ✓");
        assert_eq!(
            frags(&lines[0]),
            vec![(Keyword, "const"), (Plain, " é = "), (String, "'ü'"), (Plain, " "), (Comment, "// ✓")]
        );
    }

    #[test]
    fn is_deterministic() {
        let source = crate::generate(
            crate::TargetLibrary::Viem,
            "0xdAC17F958D2ee523a2206206994597C13D831ec7",
            &crate::constants::demo_abi()[1],
        );
        assert_eq!(highlight(&source), highlight(&source));
    }
}
