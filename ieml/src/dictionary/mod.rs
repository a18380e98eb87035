//! The dictionary of IEML terms
//!
//! A `Dictionary` is an immutable table of scripts, each with a grammatical
//! class and a set of relations. Terms are interned lazily: the first lookup
//! of a script creates its `Term`, every later lookup returns that same
//! instance, from any thread.

pub mod term;

pub use term::{script_layer, GrammaticalClass, Relations, Term};

use crate::{IemlError, IemlResult};
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::{debug, trace};

/// One term definition, as found in a dictionary file
#[derive(Debug, Clone, Deserialize)]
pub struct TermEntry {
    pub script: String,
    pub class: GrammaticalClass,
    #[serde(default)]
    pub relations: BTreeMap<String, Vec<String>>,
}

impl TermEntry {
    pub fn new(script: impl Into<String>, class: GrammaticalClass) -> Self {
        Self {
            script: script.into(),
            class,
            relations: BTreeMap::new(),
        }
    }

    pub fn with_relation(mut self, kind: impl Into<String>, script: impl Into<String>) -> Self {
        self.relations
            .entry(kind.into())
            .or_default()
            .push(script.into());
        self
    }
}

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    version: Option<String>,
    terms: Vec<TermEntry>,
}

#[derive(Debug)]
struct Definition {
    index: usize,
    layer: u8,
    entry: TermEntry,
}

fn script_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z:.\-',_;+]*[:.\-',_;]$").expect("script pattern is a valid regex")
    })
}

#[derive(Debug)]
pub struct Dictionary {
    version: Option<String>,
    definitions: HashMap<String, Definition>,
    order: Vec<String>,
    interned: RwLock<HashMap<String, Term>>,
}

impl Dictionary {
    /// Build a dictionary from term definitions.
    ///
    /// Fails on malformed scripts, duplicated scripts and relations pointing
    /// to scripts that are not defined.
    pub fn from_entries(
        version: Option<String>,
        entries: impl IntoIterator<Item = TermEntry>,
    ) -> IemlResult<Self> {
        let mut by_script: BTreeMap<(u8, String), TermEntry> = BTreeMap::new();

        for entry in entries {
            if !script_pattern().is_match(&entry.script) {
                return Err(IemlError::Dictionary(format!(
                    "Invalid script '{}'",
                    entry.script
                )));
            }
            let layer = script_layer(&entry.script).ok_or_else(|| {
                IemlError::Dictionary(format!("Script '{}' has no layer mark", entry.script))
            })?;
            let key = (layer, entry.script.clone());
            if by_script.contains_key(&key) {
                return Err(IemlError::Dictionary(format!(
                    "Duplicate script '{}'",
                    entry.script
                )));
            }
            by_script.insert(key, entry);
        }

        let mut definitions = HashMap::with_capacity(by_script.len());
        let mut order = Vec::with_capacity(by_script.len());
        for (index, ((layer, script), entry)) in by_script.into_iter().enumerate() {
            order.push(script.clone());
            definitions.insert(
                script,
                Definition {
                    index,
                    layer,
                    entry,
                },
            );
        }

        for definition in definitions.values() {
            for (kind, targets) in &definition.entry.relations {
                if let Some(missing) = targets.iter().find(|t| !definitions.contains_key(*t)) {
                    return Err(IemlError::Dictionary(format!(
                        "Relation '{}' of '{}' points to unknown script '{}'",
                        kind, definition.entry.script, missing
                    )));
                }
            }
        }

        debug!(
            terms = order.len(),
            version = version.as_deref().unwrap_or("<unversioned>"),
            "dictionary loaded"
        );

        Ok(Self {
            version,
            definitions,
            order,
            interned: RwLock::new(HashMap::new()),
        })
    }

    /// Load a dictionary from its JSON representation
    pub fn from_json(json: &str) -> IemlResult<Self> {
        let file: DictionaryFile = serde_json::from_str(json)
            .map_err(|e| IemlError::Dictionary(format!("Malformed dictionary file: {}", e)))?;
        Self::from_entries(file.version, file.terms)
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, script: &str) -> bool {
        self.definitions.contains_key(script)
    }

    /// Look up a term by script, interning it on first access
    pub fn term(&self, script: &str) -> IemlResult<Term> {
        if let Some(term) = self
            .interned
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(script)
        {
            return Ok(term.clone());
        }

        let definition = self
            .definitions
            .get(script)
            .ok_or_else(|| IemlError::TermNotFound(script.to_string()))?;

        let mut table = self
            .interned
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let term = table
            .entry(script.to_string())
            .or_insert_with(|| {
                trace!(script, "interning term");
                Term::new(
                    definition.entry.script.clone(),
                    definition.index,
                    definition.layer,
                    definition.entry.class,
                    Relations::new(definition.entry.relations.clone()),
                )
            })
            .clone();
        Ok(term)
    }

    /// All terms, in total order
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.order.iter().filter_map(|script| self.term(script).ok())
    }

    /// Terms related to `term` through `kind`
    pub fn related(&self, term: &Term, kind: &str) -> IemlResult<Vec<Term>> {
        term.relations()
            .get(kind)
            .iter()
            .map(|script| self.term(script))
            .collect()
    }
}
