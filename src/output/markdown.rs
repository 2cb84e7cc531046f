//! Markdown output formatting
//!
//! This module provides `MarkdownFormatter` which outputs tree content
//! as a nested markdown list, suitable for documentation or LLM context.

use std::io;

use crate::tree::StreamingOutput;

const INDENT: &str = "  ";

/// Markdown output formatter - outputs tree as nested markdown list.
/// Implements the StreamingOutput trait for use with StreamingWalker.
#[derive(Debug, Default)]
pub struct MarkdownFormatter {
    output: String,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the formatted output string.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take ownership of the output string.
    pub fn into_output(self) -> String {
        self.output
    }
}

impl StreamingOutput for MarkdownFormatter {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        _is_last: bool,
        _prefix: &str,
        depth: usize,
    ) -> io::Result<()> {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(&INDENT.repeat(depth));

        if is_dir {
            // Directories in bold
            self.output.push_str("- **");
            self.output.push_str(name);
            self.output.push_str("/**");
        } else {
            self.output.push_str("- ");
            self.output.push_str(name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::StreamingWalker;

    fn render(dir: &TestDir) -> String {
        let mut formatter = MarkdownFormatter::new();
        StreamingWalker::new()
            .walk_streaming(dir.path(), &mut formatter)
            .unwrap();
        formatter.into_output()
    }

    #[test]
    fn test_nested_list() {
        let dir = TestDir::new();
        dir.add_file("README.md", "");
        dir.add_file("src/a.cs", "");
        dir.add_file("src/models/b.cs", "");

        let expected = "\
- README.md
- **src/**
  - a.cs
  - **models/**
    - b.cs";
        assert_eq!(render(&dir), expected);
    }

    #[test]
    fn test_empty_dir_has_no_blank_line() {
        let dir = TestDir::new();
        dir.add_dir("empty");
        dir.add_file("z.md", "");
        assert_eq!(render(&dir), "- **empty/**\n- z.md");
    }
}
