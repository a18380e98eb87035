//! Hypertexts: texts linked to each other
//!
//! A [`Hyperlink`] goes from a source text to a target text and is anchored
//! on a [`PropositionPath`] inside the source. A [`Hypertext`] is a set of
//! links, and the one object that can change after construction: adding a
//! link drops its rendered form, which is rebuilt on the next read.
//!
//! A hypertext prints as its source texts, each written with the target
//! texts nested right after the member their path starts from. The rest of
//! the path, if any, comes first behind `>`:
//!
//! ```text
//! {/[([o.wa.-])]{/[([t.i.-s.i.-'])]/}/}
//! {/[(..)+(..)]>(..)>[([A:])]{/[([wa.])]/}/}
//! ```

use crate::syntax::{Canonical, Ieml, Text};
use crate::{IemlError, IemlResult};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::OnceLock;

/// A descent from a text member down to one of its descendants
#[derive(Debug, Clone)]
pub struct PropositionPath {
    steps: Vec<Ieml>,
    canonical: String,
}

impl PropositionPath {
    /// Each step must be a direct child of the step before it
    pub fn new(steps: Vec<Ieml>) -> IemlResult<Self> {
        if steps.is_empty() {
            return Err(IemlError::invalid_argument(
                "PropositionPath",
                "a path must have at least one step",
            ));
        }
        if let Some(pair) = steps.windows(2).find(|pair| !pair[0].has_child(&pair[1])) {
            return Err(IemlError::invalid_argument(
                "PropositionPath",
                format!("{} is not a child of {}", pair[1], pair[0]),
            ));
        }

        let canonical = steps
            .iter()
            .map(Ieml::canonical)
            .collect::<Vec<_>>()
            .join(">");
        Ok(Self { steps, canonical })
    }

    pub fn steps(&self) -> &[Ieml] {
        &self.steps
    }

    /// The object the path ends on
    pub fn target(&self) -> &Ieml {
        &self.steps[self.steps.len() - 1]
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// True if the first step is a member of `text`
    pub fn is_reachable_in(&self, text: &Text) -> bool {
        text.members().iter().any(|m| m.matches(&self.steps[0]))
    }
}

impl Canonical for PropositionPath {
    fn canonical(&self) -> &str {
        &self.canonical
    }
}

canonical_identity!(PropositionPath);

impl Ord for PropositionPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.steps.cmp(&other.steps)
    }
}

impl fmt::Display for PropositionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

#[derive(Debug, Clone)]
pub struct Hyperlink {
    source: Text,
    target: Text,
    path: PropositionPath,
    canonical: String,
}

impl Hyperlink {
    pub fn new(source: Text, target: Text, path: PropositionPath) -> IemlResult<Self> {
        if !path.is_reachable_in(&source) {
            return Err(IemlError::invalid_argument(
                "Hyperlink",
                format!("the path {} is not reachable in {}", path, source),
            ));
        }

        let canonical = format!(
            "({}@{}@{})",
            source.canonical(),
            path.canonical(),
            target.canonical()
        );
        Ok(Self {
            source,
            target,
            path,
            canonical,
        })
    }

    pub fn source(&self) -> &Text {
        &self.source
    }

    pub fn target(&self) -> &Text {
        &self.target
    }

    pub fn path(&self) -> &PropositionPath {
        &self.path
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl Canonical for Hyperlink {
    fn canonical(&self) -> &str {
        &self.canonical
    }
}

canonical_identity!(Hyperlink);

impl Ord for Hyperlink {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl fmt::Display for Hyperlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

#[derive(Debug, Clone)]
pub struct Hypertext {
    links: BTreeSet<Hyperlink>,
    rendered: OnceLock<String>,
}

impl Hypertext {
    pub fn new(links: impl IntoIterator<Item = Hyperlink>) -> IemlResult<Self> {
        let links: BTreeSet<Hyperlink> = links.into_iter().collect();
        if links.is_empty() {
            return Err(IemlError::invalid_argument(
                "Hypertext",
                "a hypertext must contain at least one hyperlink",
            ));
        }
        Ok(Self {
            links,
            rendered: OnceLock::new(),
        })
    }

    /// Returns false if the link was already present
    pub fn add_hyperlink(&mut self, link: Hyperlink) -> bool {
        let inserted = self.links.insert(link);
        if inserted {
            self.rendered.take();
        }
        inserted
    }

    pub fn links(&self) -> impl Iterator<Item = &Hyperlink> + '_ {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Every source and target text, each once
    pub fn texts(&self) -> BTreeSet<&Text> {
        self.links
            .iter()
            .flat_map(|link| [&link.source, &link.target])
            .collect()
    }

    /// True if `needle` is one of the texts or contained in one
    pub fn contains(&self, needle: &Ieml) -> bool {
        self.texts().into_iter().any(|text| text.contains(needle))
    }

    pub fn canonical(&self) -> &str {
        self.rendered.get_or_init(|| self.render())
    }

    fn render(&self) -> String {
        let mut by_source: BTreeMap<&Text, Vec<&Hyperlink>> = BTreeMap::new();
        for link in &self.links {
            by_source.entry(&link.source).or_default().push(link);
        }

        let mut rendered = String::new();
        for (source, links) in by_source {
            rendered.push('{');
            for member in source.members() {
                rendered.push('/');
                rendered.push_str(member.canonical());
                for link in links.iter().filter(|l| member.matches(&l.path.steps[0])) {
                    for step in &link.path.steps[1..] {
                        rendered.push('>');
                        rendered.push_str(step.canonical());
                    }
                    rendered.push_str(link.target.canonical());
                }
                rendered.push('/');
            }
            rendered.push('}');
        }
        rendered
    }
}

impl PartialEq for Hypertext {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Hypertext {}

impl PartialOrd for Hypertext {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hypertext {
    fn cmp(&self, other: &Self) -> Ordering {
        self.links.cmp(&other.links)
    }
}

impl std::hash::Hash for Hypertext {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(self.canonical(), state)
    }
}

impl fmt::Display for Hypertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
