//! Severity-tagged reply blocks and their aggregation.

use std::fmt;

/// Severity of one reply block, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum OutputFlag {
    #[default]
    Empty,
    Debug,
    Info,
    Skip,
    Succeed,
    Warn,
    Abort,
    Error,
    Fatal,
}

impl fmt::Display for OutputFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFlag::Empty => "Empty",
            OutputFlag::Debug => "Debug",
            OutputFlag::Info => "Info",
            OutputFlag::Skip => "Skip",
            OutputFlag::Succeed => "Succeed",
            OutputFlag::Warn => "Warn",
            OutputFlag::Abort => "Abort",
            OutputFlag::Error => "Error",
            OutputFlag::Fatal => "Fatal",
        };
        f.write_str(name)
    }
}

/// One block of reply text with its severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub flag: OutputFlag,
    pub content: String,
}

impl Output {
    pub fn new(flag: OutputFlag, content: impl Into<String>) -> Self {
        Self {
            flag,
            content: content.into(),
        }
    }

    /// A block that renders to nothing. Handlers return this when the packs
    /// do not fit their shape.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Anything up to a warning still counts as a usable result.
    pub fn is_ok(&self) -> bool {
        self.flag <= OutputFlag::Warn
    }
}

/// Ordered collection of reply blocks from one calculator invocation.
#[derive(Debug, Clone, Default)]
pub struct Outputs {
    entries: Vec<Output>,
}

impl Outputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entry(flag: OutputFlag, content: impl Into<String>) -> Self {
        Self {
            entries: vec![Output::new(flag, content)],
        }
    }

    pub fn push(&mut self, output: Output) {
        self.entries.push(output);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|o| o.flag == OutputFlag::Empty)
    }

    /// Highest severity across all entries.
    pub fn severity(&self) -> OutputFlag {
        self.entries
            .iter()
            .map(|o| o.flag)
            .max()
            .unwrap_or(OutputFlag::Empty)
    }

    /// Render all non-empty blocks, joined by `sep`. With labels shown,
    /// contiguous runs of the same severity share one label.
    pub fn to_text(&self, show_labels: bool, sep: &str) -> String {
        let visible: Vec<&Output> = self
            .entries
            .iter()
            .filter(|o| o.flag != OutputFlag::Empty)
            .collect();
        if visible.is_empty() {
            return String::new();
        }
        if !show_labels {
            return visible
                .iter()
                .map(|o| o.content.as_str())
                .collect::<Vec<_>>()
                .join(sep);
        }

        let mut blocks: Vec<String> = Vec::new();
        let mut run: Vec<&str> = Vec::new();
        let mut run_flag = visible[0].flag;
        for output in &visible {
            if output.flag != run_flag {
                blocks.push(format!("{run_flag}: {}", run.join(sep)));
                run.clear();
                run_flag = output.flag;
            }
            run.push(output.content.as_str());
        }
        blocks.push(format!("{run_flag}: {}", run.join(sep)));
        blocks.join(sep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_max_flag() {
        let mut outputs = Outputs::new();
        outputs.push(Output::new(OutputFlag::Succeed, "a"));
        outputs.push(Output::new(OutputFlag::Error, "b"));
        outputs.push(Output::new(OutputFlag::Info, "c"));
        assert_eq!(outputs.severity(), OutputFlag::Error);
    }

    #[test]
    fn empty_blocks_render_to_nothing() {
        let mut outputs = Outputs::new();
        outputs.push(Output::empty());
        outputs.push(Output::empty());
        assert!(outputs.is_empty());
        assert_eq!(outputs.to_text(false, "\n\n"), "");
    }

    #[test]
    fn hidden_labels_join_contents() {
        let mut outputs = Outputs::new();
        outputs.push(Output::new(OutputFlag::Succeed, "first"));
        outputs.push(Output::empty());
        outputs.push(Output::new(OutputFlag::Error, "second"));
        assert_eq!(outputs.to_text(false, "\n\n"), "first\n\nsecond");
    }

    #[test]
    fn contiguous_runs_share_one_label() {
        let mut outputs = Outputs::new();
        outputs.push(Output::new(OutputFlag::Succeed, "a"));
        outputs.push(Output::new(OutputFlag::Succeed, "b"));
        outputs.push(Output::new(OutputFlag::Error, "c"));
        assert_eq!(outputs.to_text(true, " "), "Succeed: a b Error: c");
    }

    #[test]
    fn warn_is_still_ok() {
        assert!(Output::new(OutputFlag::Warn, "w").is_ok());
        assert!(!Output::new(OutputFlag::Error, "e").is_ok());
    }
}
