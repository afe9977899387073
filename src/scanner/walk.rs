use crate::error::{Result, ScanError};
use crate::model::ScanRules;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Plugin bundles recorded so far in the current walk.
///
/// Entries are checked against this set before they are recorded, so the
/// walk must add a bundle before any of its children are visited.
#[derive(Debug, Default)]
pub struct BundleSet {
    bundles: Vec<PathBuf>,
}

impl BundleSet {
    pub fn insert(&mut self, path: &Path) {
        self.bundles.push(path.to_path_buf());
    }

    /// Returns true if `path` lies inside a recorded bundle.
    ///
    /// Matching is per path segment: `Acme.vst3x/inner.dll` is not inside
    /// `Acme.vst3`.
    pub fn encloses(&self, path: &Path) -> bool {
        self.bundles
            .iter()
            .any(|bundle| path != bundle && path.starts_with(bundle))
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

/// A directory the walk could not list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything a walk found under the root.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Plugin bundles and plain files, in discovery order.
    pub items: Vec<PathBuf>,
    /// Directories that are not plugin bundles.
    pub subdirs: Vec<PathBuf>,
    /// Subtrees that could not be read.
    pub skipped: Vec<SkippedPath>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Descend,
    Prune,
}

/// Records a single entry and tells the walk whether to enter it.
pub fn visit(
    path: &Path,
    is_dir: bool,
    rules: &ScanRules,
    bundles: &mut BundleSet,
    outcome: &mut WalkOutcome,
) -> Step {
    if bundles.encloses(path) {
        debug!(path = %path.display(), "Inside a plugin bundle, ignoring");
        return Step::Prune;
    }

    if !is_dir && rules.is_excluded(path) {
        debug!(path = %path.display(), "Excluded file");
        return Step::Prune;
    }

    if rules.is_plugin(path) {
        debug!(path = %path.display(), "Plugin bundle");
        bundles.insert(path);
        outcome.items.push(path.to_path_buf());
        return Step::Prune;
    }

    if is_dir {
        outcome.subdirs.push(path.to_path_buf());
        return Step::Descend;
    }

    outcome.items.push(path.to_path_buf());
    Step::Descend
}

/// Walks `root` depth-first without entering plugin bundles.
///
/// Entries within a directory are visited in file-name order. Symlinks to
/// directories count as directories but are never followed. Directories
/// that cannot be listed are logged and recorded in
/// [`WalkOutcome::skipped`]; the rest of the tree is still walked.
///
/// # Errors
///
/// Returns [`ScanError::InvalidRoot`] if `root` is not an existing directory.
pub fn walk(root: &Path, rules: &ScanRules) -> Result<WalkOutcome> {
    if !root.is_dir() {
        return Err(ScanError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let mut outcome = WalkOutcome::default();
    let mut bundles = BundleSet::default();

    let mut entries = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(next) = entries.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                warn!(path = %path.display(), error = %err, "Skipping unreadable directory");
                outcome.skipped.push(SkippedPath {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        // skip_current_dir on anything but a real directory would skip
        // the rest of its parent
        let real_dir = entry.file_type().is_dir();
        let is_dir = real_dir || (entry.path_is_symlink() && entry.path().is_dir());
        let step = visit(entry.path(), is_dir, rules, &mut bundles, &mut outcome);
        if real_dir && step == Step::Prune {
            entries.skip_current_dir();
        }
    }

    debug!(
        items = outcome.items.len(),
        subdirs = outcome.subdirs.len(),
        bundles = bundles.len(),
        skipped = outcome.skipped.len(),
        "Walk finished"
    );

    Ok(outcome)
}
