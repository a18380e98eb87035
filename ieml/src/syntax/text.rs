use crate::syntax::{Canonical, Ieml, Sentence, SuperSentence, Word};
use crate::{IemlError, IemlResult};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A member of a text
///
/// Every word sorts before every sentence, and every sentence before every
/// super-sentence. Propositions of the same kind sort by canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Proposition {
    Word(Word),
    Sentence(Sentence),
    SuperSentence(SuperSentence),
}

impl Proposition {
    fn level(&self) -> u8 {
        match self {
            Proposition::Word(_) => 0,
            Proposition::Sentence(_) => 1,
            Proposition::SuperSentence(_) => 2,
        }
    }

    pub fn canonical(&self) -> &str {
        match self {
            Proposition::Word(w) => w.canonical(),
            Proposition::Sentence(s) => s.canonical(),
            Proposition::SuperSentence(s) => s.canonical(),
        }
    }

    /// True if `ieml` is this very proposition
    pub fn matches(&self, ieml: &Ieml) -> bool {
        match (self, ieml) {
            (Proposition::Word(own), Ieml::Word(other)) => own == other,
            (Proposition::Sentence(own), Ieml::Sentence(other)) => own == other,
            (Proposition::SuperSentence(own), Ieml::SuperSentence(other)) => own == other,
            _ => false,
        }
    }

    /// True if `ieml` is this proposition or one of its descendants
    pub fn contains(&self, ieml: &Ieml) -> bool {
        if self.matches(ieml) {
            return true;
        }
        match self {
            Proposition::Word(w) => w.contains(ieml),
            Proposition::Sentence(s) => s.contains(ieml),
            Proposition::SuperSentence(s) => s.contains(ieml),
        }
    }
}

impl Ord for Proposition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level()
            .cmp(&other.level())
            .then_with(|| self.canonical().cmp(other.canonical()))
    }
}

impl PartialOrd for Proposition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proposition::Word(w) => write!(f, "{}", w),
            Proposition::Sentence(s) => write!(f, "{}", s),
            Proposition::SuperSentence(s) => write!(f, "{}", s),
        }
    }
}

impl From<Proposition> for Ieml {
    fn from(proposition: Proposition) -> Self {
        match proposition {
            Proposition::Word(w) => Ieml::Word(w),
            Proposition::Sentence(s) => Ieml::Sentence(s),
            Proposition::SuperSentence(s) => Ieml::SuperSentence(s),
        }
    }
}

impl TryFrom<Ieml> for Proposition {
    type Error = Ieml;

    fn try_from(ieml: Ieml) -> Result<Self, Self::Error> {
        match ieml {
            Ieml::Word(w) => Ok(Proposition::Word(w)),
            Ieml::Sentence(s) => Ok(Proposition::Sentence(s)),
            Ieml::SuperSentence(s) => Ok(Proposition::SuperSentence(s)),
            other => Err(other),
        }
    }
}

/// An unordered set of propositions
#[derive(Debug, Clone)]
pub struct Text {
    members: Vec<Proposition>,
    canonical: String,
}

impl Text {
    /// Texts given as children are flattened into their members. Duplicates collapse.
    pub fn new(children: impl IntoIterator<Item = Ieml>) -> IemlResult<Self> {
        let mut members = BTreeSet::new();
        for child in children {
            match child {
                Ieml::Text(text) => members.extend(text.members),
                other => {
                    let proposition = Proposition::try_from(other).map_err(|other| {
                        IemlError::invalid_argument(
                            "Text",
                            format!(
                                "a text can only contain words, sentences and super-sentences, got a {}",
                                other.kind()
                            ),
                        )
                    })?;
                    members.insert(proposition);
                }
            }
        }
        Self::from_members(members)
    }

    pub fn from_propositions(propositions: impl IntoIterator<Item = Proposition>) -> IemlResult<Self> {
        Self::from_members(propositions.into_iter().collect())
    }

    fn from_members(members: BTreeSet<Proposition>) -> IemlResult<Self> {
        if members.is_empty() {
            return Err(IemlError::invalid_argument(
                "Text",
                "a text must contain at least one proposition",
            ));
        }

        let members: Vec<Proposition> = members.into_iter().collect();
        let canonical = format!(
            "{{{}}}",
            members
                .iter()
                .map(|m| format!("/{}/", m.canonical()))
                .collect::<String>()
        );
        Ok(Self { members, canonical })
    }

    /// Members in text order
    pub fn members(&self) -> &[Proposition] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// A text needle is contained when all of its members are.
    pub fn contains(&self, needle: &Ieml) -> bool {
        if let Ieml::Text(other) = needle {
            return other.members.iter().all(|wanted| {
                let wanted = Ieml::from(wanted.clone());
                self.members.iter().any(|m| m.contains(&wanted))
            });
        }
        self.members.iter().any(|m| m.contains(needle))
    }
}

impl Canonical for Text {
    fn canonical(&self) -> &str {
        &self.canonical
    }
}

canonical_identity!(Text);

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.members.cmp(&other.members)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for member in &self.members {
            write!(f, "/{}/", member)?;
        }
        write!(f, "}}")
    }
}
