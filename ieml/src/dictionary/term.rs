use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Grammatical class of a term, and by extension of every object built on terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalClass {
    Auxiliary,
    Verb,
    Noun,
}

impl GrammaticalClass {
    pub fn name(&self) -> &'static str {
        match self {
            GrammaticalClass::Auxiliary => "auxiliary",
            GrammaticalClass::Verb => "verb",
            GrammaticalClass::Noun => "noun",
        }
    }
}

impl fmt::Display for GrammaticalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Relations of a term to other terms of the same dictionary, by relation kind
///
/// Related terms are stored as scripts and kept sorted per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    by_kind: BTreeMap<String, Vec<String>>,
}

impl Relations {
    pub(crate) fn new(by_kind: BTreeMap<String, Vec<String>>) -> Self {
        let by_kind = by_kind
            .into_iter()
            .map(|(kind, mut scripts)| {
                scripts.sort();
                scripts.dedup();
                (kind, scripts)
            })
            .collect();
        Self { by_kind }
    }

    /// Scripts related through `kind`; empty if the kind is unknown
    pub fn get(&self, kind: &str) -> &[String] {
        self.by_kind.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.by_kind.keys().map(String::as_str)
    }

    pub fn is_related(&self, script: &str) -> bool {
        self.by_kind
            .values()
            .any(|scripts| scripts.iter().any(|s| s == script))
    }

    pub fn is_empty(&self) -> bool {
        self.by_kind.values().all(Vec::is_empty)
    }
}

/// Layer of a script, read from its trailing layer mark.
///
/// Returns `None` when the script does not end with a layer mark.
pub fn script_layer(script: &str) -> Option<u8> {
    match script.chars().last()? {
        ':' => Some(0),
        '.' => Some(1),
        '-' => Some(2),
        '\'' => Some(3),
        ',' => Some(4),
        '_' => Some(5),
        ';' => Some(6),
        _ => None,
    }
}

#[derive(Debug)]
struct TermData {
    script: String,
    canonical: String,
    index: usize,
    layer: u8,
    class: GrammaticalClass,
    relations: Relations,
}

/// A dictionary term: the leaf of every IEML object.
///
/// `Term` is a shared handle. Only a [`Dictionary`](super::Dictionary) can
/// create one, and it hands out the same instance for a given script, so
/// two equal terms from one dictionary are always [`Term::ptr_eq`].
#[derive(Clone)]
pub struct Term(Arc<TermData>);

impl Term {
    pub(crate) fn new(
        script: String,
        index: usize,
        layer: u8,
        class: GrammaticalClass,
        relations: Relations,
    ) -> Self {
        let canonical = format!("[{}]", script);
        Self(Arc::new(TermData {
            script,
            canonical,
            index,
            layer,
            class,
            relations,
        }))
    }

    pub fn script(&self) -> &str {
        &self.0.script
    }

    /// Canonical text form: the script between square brackets
    pub fn canonical(&self) -> &str {
        &self.0.canonical
    }

    /// Position of the term in its dictionary's total order
    pub fn index(&self) -> usize {
        self.0.index
    }

    pub fn layer(&self) -> u8 {
        self.0.layer
    }

    pub fn grammatical_class(&self) -> GrammaticalClass {
        self.0.class
    }

    pub fn relations(&self) -> &Relations {
        &self.0.relations
    }

    /// True if both handles point to the same interned instance
    pub fn ptr_eq(a: &Term, b: &Term) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        Term::ptr_eq(self, other) || self.canonical() == other.canonical()
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state)
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Terms are ordered by layer, then by script. A dictionary's `index` follows
/// the same order.
impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        if Term::ptr_eq(self, other) {
            return Ordering::Equal;
        }
        self.layer()
            .cmp(&other.layer())
            .then_with(|| self.script().cmp(other.script()))
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Term").field(&self.0.script).finish()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}
