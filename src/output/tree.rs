//! ASCII tree formatter
//!
//! Renders entries the way `tree` does, with `├── `/`└── ` connectors and
//! `│   ` guides for open ancestors.

use std::io;

use crate::tree::StreamingOutput;

/// Formatter for the ASCII tree form.
///
/// Lines are joined with `\n` and carry no trailing newline; the root line is
/// written by the caller.
#[derive(Debug, Default)]
pub struct TreeFormatter {
    lines: Vec<String>,
}

impl TreeFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rendered tree.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl StreamingOutput for TreeFormatter {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        _depth: usize,
    ) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };
        let suffix = if is_dir { "/" } else { "" };
        self.lines
            .push(format!("{}{}{}{}", prefix, connector, name, suffix));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::StreamingWalker;

    fn render(dir: &TestDir) -> String {
        let mut formatter = TreeFormatter::new();
        StreamingWalker::new()
            .walk_streaming(dir.path(), &mut formatter)
            .unwrap();
        formatter.output()
    }

    #[test]
    fn test_connectors_and_guides() {
        let dir = TestDir::new();
        dir.add_file("README.md", "");
        dir.add_file("src/a.cs", "");
        dir.add_file("src/models/b.cs", "");
        dir.add_file("tests/t.cs", "");

        let expected = "\
├── README.md
├── src/
│   ├── a.cs
│   └── models/
│       └── b.cs
└── tests/
    └── t.cs";
        assert_eq!(render(&dir), expected);
    }

    #[test]
    fn test_empty_root_renders_nothing() {
        let dir = TestDir::new();
        assert_eq!(render(&dir), "");
    }

    #[test]
    fn test_empty_subdir_is_single_line() {
        let dir = TestDir::new();
        dir.add_dir("empty");
        dir.add_file("z.md", "");
        assert_eq!(render(&dir), "├── empty/\n└── z.md");
    }
}
