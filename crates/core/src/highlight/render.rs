//! Renderers for highlighted lines.

use super::{FragmentClass, HighlightedLine};
use std::{borrow::Cow, fmt::Write};
use yansi::{Color, Style};

/// Markup emitted for an empty line so that it keeps its height.
pub const EMPTY_LINE_HTML: &str = "&nbsp;";

/// Separator between the line number gutter and the code.
pub const GUTTER_SEPARATOR: &str = "│";

/// Renders each line as HTML, wrapping classified fragments in `<span class="code-*">`.
///
/// All text is escaped, including string and comment contents.
pub fn to_html(lines: &[HighlightedLine]) -> Vec<String> {
    lines.iter().map(line_to_html).collect()
}

/// Renders a single line as HTML.
pub fn line_to_html(line: &HighlightedLine) -> String {
    if line.is_empty() {
        return EMPTY_LINE_HTML.to_string();
    }
    let mut out = String::new();
    for fragment in &line.fragments {
        let text = escape_html(&fragment.text);
        match fragment.class.css_class() {
            Some(class) => {
                let _ = write!(out, r#"<span class="{class}">{text}</span>"#);
            }
            None => out.push_str(&text),
        }
    }
    out
}

/// Escapes `&`, `<` and `>`.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            ch => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Renders each line with ANSI escape codes.
///
/// This always paints; callers decide whether the terminal wants colors.
pub fn to_ansi(lines: &[HighlightedLine]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let mut out = String::with_capacity(line.fragments.iter().map(|f| f.text.len()).sum());
            for fragment in &line.fragments {
                paint(&fragment.text, class_style(fragment.class), &mut out);
            }
            out
        })
        .collect()
}

/// Renders each line as its plain source text.
pub fn to_plain(lines: &[HighlightedLine]) -> Vec<String> {
    lines.iter().map(HighlightedLine::text).collect()
}

/// Prefixes every rendered line with its right-aligned, 1-based line number.
pub fn with_gutter(lines: &[String]) -> String {
    let width = lines.len().to_string().len();
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{:>width$} {GUTTER_SEPARATOR} {line}", i + 1);
    }
    out
}

/// Returns the terminal style for a fragment class.
pub fn class_style(class: FragmentClass) -> Style {
    match class {
        FragmentClass::Plain => Style::default(),
        FragmentClass::String => Color::Green.foreground(),
        FragmentClass::Comment => Color::Primary.foreground().dim().italic(),
        FragmentClass::Keyword => Color::Blue.foreground(),
        FragmentClass::Sdk => Color::Yellow.foreground().bold(),
        FragmentClass::Address => Color::Magenta.foreground().bold(),
    }
}

fn paint(text: &str, style: Style, out: &mut String) {
    if style == Style::default() {
        out.push_str(text);
    } else {
        let _ = style.fmt_prefix(out);
        out.push_str(text);
        let _ = style.fmt_suffix(out);
    }
}
