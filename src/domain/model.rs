use std::collections::BTreeMap;
use std::path::PathBuf;

/// One input file, read once and dropped after extraction.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// File name used in progress output; falls back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Group(String),
    Case { group: String, case: String },
}

/// Per-file extraction result: group name to the cases found for it, both in
/// file order. A group declared without cases keeps an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    groups: Vec<(String, Vec<String>)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Group(group) => {
                self.entry(group);
            }
            Declaration::Case { group, case } => self.entry(group).push(case),
        }
    }

    fn entry(&mut self, group: String) -> &mut Vec<String> {
        let index = match self.groups.iter().position(|(name, _)| *name == group) {
            Some(index) => index,
            None => {
                self.groups.push((group, Vec::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index].1
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn cases(&self, group: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(name, _)| name == group)
            .map(|(_, cases)| cases.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, cases)| (name.as_str(), cases.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

impl FromIterator<Declaration> for Declarations {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        let mut declarations = Declarations::new();
        for declaration in iter {
            declarations.push(declaration);
        }
        declarations
    }
}

/// What one source file contributed, kept for progress reporting.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub name: String,
    pub declarations: Declarations,
}

/// Frozen group to case mapping. Groups and their cases are sorted and
/// duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRegistry {
    groups: BTreeMap<String, Vec<String>>,
}

impl GroupRegistry {
    pub(crate) fn from_sorted(groups: BTreeMap<String, Vec<String>>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, cases)| (name.as_str(), cases.as_slice()))
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn cases(&self, group: &str) -> Option<&[String]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactKind {
    Runner { group: String },
    Aggregator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub contents: String,
}

/// Paths produced by one load step. In dry-run mode nothing was written and
/// the paths are where the artifacts would have gone.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub runners: Vec<PathBuf>,
    pub aggregator: PathBuf,
    pub dry_run: bool,
}
