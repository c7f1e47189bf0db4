use fab_atom::VerifyPolicy;
use fab_atom_history::layout;
use std::path::{Path, PathBuf};

/// Locations of one atomization run's artifacts.
///
/// Relative paths are taken relative to `root`, which is also the working
/// directory the atomizer is launched in.
#[derive(Debug, Clone)]
pub struct AtomConfig {
    pub root: PathBuf,
    pub history: PathBuf,
    pub trace: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub atomizer: PathBuf,
    /// Arguments placed before `--atomized`, for launchers such as
    /// `sh script` (`--atomizer-arg`, repeatable).
    pub atomizer_args: Vec<String>,
    pub policy: VerifyPolicy,
}

impl Default for AtomConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            history: PathBuf::from(layout::HISTORY_FILE),
            trace: PathBuf::from(layout::TRACE_FILE),
            input: PathBuf::from(layout::ATOMIZER_INPUT),
            output: PathBuf::from(layout::ATOMIZED_OUTPUT),
            atomizer: PathBuf::from(layout::ATOMIZER_BIN),
            atomizer_args: Vec::new(),
            policy: VerifyPolicy::default(),
        }
    }
}

impl AtomConfig {
    /// Default layout rooted at `dir`, or at the current directory.
    pub fn resolve(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(root) => Self {
                root,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.history = p;
        }
        self
    }

    pub fn with_trace(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.trace = p;
        }
        self
    }

    pub fn with_input(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.input = p;
        }
        self
    }

    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.output = p;
        }
        self
    }

    pub fn with_atomizer(mut self, bin: Option<PathBuf>) -> Self {
        if let Some(b) = bin {
            self.atomizer = b;
        }
        self
    }

    /// Appends launcher arguments; an empty list leaves the current ones.
    pub fn with_atomizer_args(mut self, args: Vec<String>) -> Self {
        self.atomizer_args.extend(args);
        self
    }

    pub fn with_policy(mut self, policy: VerifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn under_root(&self, p: &Path) -> PathBuf {
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.root.join(p)
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.under_root(&self.history)
    }

    pub fn trace_path(&self) -> PathBuf {
        self.under_root(&self.trace)
    }

    pub fn output_path(&self) -> PathBuf {
        self.under_root(&self.output)
    }
}
