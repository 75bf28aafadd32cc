//! Indented text output.

/// Options for template output
#[derive(Debug, Clone)]
pub struct TemplateOptions {
    /// Pretty print with newlines and indentation
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

/// Line-oriented buffer with indentation tracking.
pub struct TemplateWriter {
    options: TemplateOptions,
    depth: usize,
    buffer: String,
}

impl TemplateWriter {
    pub fn new(options: TemplateOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn get_output(self) -> String {
        self.buffer
    }
}
