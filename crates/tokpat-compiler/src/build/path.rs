//! Access paths from a definition root to a nested rule.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Patterns,
    Captures,
    BeginCaptures,
    EndCaptures,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patterns => "patterns",
            Self::Captures => "captures",
            Self::BeginCaptures => "beginCaptures",
            Self::EndCaptures => "endCaptures",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Field(Field),
    /// Position in a `patterns` array, as written in the source document.
    Index(usize),
    /// Capture group number.
    Capture(u32),
}

/// `root.patterns![0].captures![1]`, kept structured so that indices can be
/// rewritten when the path is rendered for a patch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessPath {
    root: String,
    steps: Vec<Step>,
}

impl AccessPath {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            steps: Vec::new(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn with(&self, step: Step) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Self {
            root: self.root.clone(),
            steps,
        }
    }

    pub fn field(&self, field: Field) -> Self {
        self.with(Step::Field(field))
    }

    pub fn index(&self, index: usize) -> Self {
        self.with(Step::Index(index))
    }

    pub fn capture(&self, group: u32) -> Self {
        self.with(Step::Capture(group))
    }

    /// Path made of the first `len` steps.
    fn prefix(&self, len: usize) -> Self {
        Self {
            root: self.root.clone(),
            steps: self.steps[..len].to_vec(),
        }
    }

    /// Render with every array index mapped through `runtime_index`, which
    /// receives the indexed array's path and the source index.
    pub fn render_with(&self, mut runtime_index: impl FnMut(&AccessPath, usize) -> usize) -> String {
        let mut out = self.root.clone();
        for (i, step) in self.steps.iter().enumerate() {
            match *step {
                Step::Field(field) => {
                    out.push('.');
                    out.push_str(field.as_str());
                    out.push('!');
                }
                Step::Index(index) => {
                    let index = runtime_index(&self.prefix(i), index);
                    out.push_str(&format!("[{index}]"));
                }
                Step::Capture(group) => out.push_str(&format!("[{group}]")),
            }
        }
        out
    }
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_, index| index))
    }
}
