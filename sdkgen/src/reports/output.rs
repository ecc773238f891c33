//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using the semantic methods; an
/// implementation only decides where plain lines and diagnostics go.
pub trait Output {
    /// Emit one line of report text.
    fn line(&mut self, text: &str);

    /// Emit one line of diagnostic text (warnings, errors).
    fn diagnostic(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str) {
        self.line(&format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(&format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.line(&format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(&format!("  - {}", text));
    }

    /// A file that was created or updated.
    fn added_item(&mut self, text: &str) {
        self.line(&format!("  + {}", text));
    }

    /// A file that was deleted.
    fn removed_item(&mut self, text: &str) {
        self.line(&format!("  - {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.diagnostic(&format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.diagnostic(&format!("error: {}", msg));
    }

    /// A separator with a label, e.g. between previewed files.
    fn divider(&mut self, label: &str) {
        self.line(&format!("── {} ──", label));
    }

    /// Text printed as-is, possibly spanning several lines.
    fn preformatted(&mut self, text: &str) {
        self.line(text);
    }

    fn newline(&mut self) {
        self.line("");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output: report lines on stdout, diagnostics on stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn diagnostic(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

/// Collects every line, diagnostics included, in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl BufferOutput {
    /// Render `report` and join the lines with `\n`.
    pub fn render(report: &impl Report) -> String {
        let mut out = Self::default();
        report.render(&mut out);
        out.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn diagnostic(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
