use clap::{Parser, ValueHint};
use eyre::Result;
use oru_cli::{opts::GlobalOpts, stdin};
use oru_core::{highlight, highlight::render};
use std::path::PathBuf;

/// CLI arguments for `oru highlight`.
#[derive(Clone, Debug, Parser)]
pub struct HighlightArgs {
    /// The file to highlight. Reads from stdin when absent or `-`.
    #[arg(value_hint = ValueHint::FilePath, value_name = "PATH")]
    path: Option<PathBuf>,

    /// Emit HTML markup with `code-*` classes instead of terminal colors.
    #[arg(long)]
    html: bool,

    /// Prefix every line with its line number.
    #[arg(long, short = 'n')]
    line_numbers: bool,
}

impl HighlightArgs {
    pub fn run(self, _global: &GlobalOpts) -> Result<()> {
        let source = stdin::read_path_or_stdin(self.path.as_deref())?;
        // a single trailing newline terminates the last line rather than starting a new one
        let source = source.strip_suffix('\n').unwrap_or(&source);

        let lines = highlight(source);
        let rendered = if self.html { render::to_html(&lines) } else { terminal_lines(&lines) };
        println!("{}", layout(&rendered, self.line_numbers));
        Ok(())
    }
}

/// Renders highlighted code for the terminal, painting only when colors are enabled.
pub fn render_code(code: &str, line_numbers: bool) -> String {
    layout(&terminal_lines(&highlight(code)), line_numbers)
}

fn terminal_lines(lines: &[highlight::HighlightedLine]) -> Vec<String> {
    if yansi::is_enabled() { render::to_ansi(lines) } else { render::to_plain(lines) }
}

fn layout(lines: &[String], line_numbers: bool) -> String {
    if line_numbers { render::with_gutter(lines) } else { lines.join("\n") }
}
