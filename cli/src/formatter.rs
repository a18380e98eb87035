use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use ieml::{AbstractSentence, Dictionary, Ieml, SentenceNode};
use std::path::PathBuf;

enum Branch {
    Middle,
    Last,
}

impl Branch {
    fn symbol(&self) -> &'static str {
        match self {
            Branch::Middle => "├─",
            Branch::Last => "└─",
        }
    }

    /// What the lines below this branch are indented with
    fn continuation(&self) -> &'static str {
        match self {
            Branch::Middle => "│  ",
            Branch::Last => "   ",
        }
    }
}

/// One expression that failed `check`
pub struct CheckFailure {
    pub location: String,
    pub message: String,
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_summary(&self, ieml: &Ieml) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} (rank {})\n", ieml.kind(), ieml.rank()));
        output.push_str(&format!("  canonical: {}\n", ieml.canonical()));
        if ieml.to_string() != ieml.canonical() {
            output.push_str(&format!("  written:   {}\n", ieml));
        }
        if let Some(class) = ieml.grammatical_class() {
            output.push_str(&format!("  class:     {}\n", class));
        }
        output
    }

    /// The sentence drawn from its root, each branch labelled with its clause mode
    pub fn format_tree<N: SentenceNode>(&self, sentence: &AbstractSentence<N>) -> String {
        let mut output = format!("{}\n", sentence.root());
        self.format_branches(sentence, sentence.root(), "", &mut output);
        output.push_str(&format!(
            "\n{} node(s), {} stage(s), class {}\n",
            sentence.nodes().len(),
            sentence.stages().len(),
            sentence.grammatical_class()
        ));
        output
    }

    fn format_branches<N: SentenceNode>(
        &self,
        sentence: &AbstractSentence<N>,
        node: &N,
        prefix: &str,
        output: &mut String,
    ) {
        let children = sentence.graph().outgoing(node);
        let last = children.len().saturating_sub(1);

        for (i, (child, clause)) in children.into_iter().enumerate() {
            let branch = if i == last {
                Branch::Last
            } else {
                Branch::Middle
            };
            output.push_str(&format!(
                "{}{} {}  (mode {})\n",
                prefix,
                branch.symbol(),
                child,
                clause.mode()
            ));
            let prefix = format!("{}{}", prefix, branch.continuation());
            self.format_branches(sentence, child, &prefix, output);
        }
    }

    pub fn format_terms(&self, dictionary: &Dictionary) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Script").set_alignment(CellAlignment::Left),
            Cell::new("Layer").set_alignment(CellAlignment::Right),
            Cell::new("Class").set_alignment(CellAlignment::Left),
            Cell::new("Relations").set_alignment(CellAlignment::Left),
        ]));

        for term in dictionary.terms() {
            let relations = term
                .relations()
                .kinds()
                .map(|kind| format!("{}: {}", kind, term.relations().get(kind).join(", ")))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(Row::from(vec![
                Cell::new(term.index()).set_alignment(CellAlignment::Right),
                Cell::new(term.script()),
                Cell::new(term.layer()).set_alignment(CellAlignment::Right),
                Cell::new(term.grammatical_class()),
                Cell::new(relations),
            ]));
        }

        let mut output = format!(
            "Dictionary {} with {} terms\n",
            dictionary.version().unwrap_or("(unversioned)"),
            dictionary.len()
        );
        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    pub fn format_check_report(
        &self,
        files: &[PathBuf],
        checked: usize,
        failures: &[CheckFailure],
    ) -> String {
        let mut output = String::new();
        for failure in failures {
            output.push_str(&format!("✗ {}\n", failure.location));
        }
        output.push_str(&format!(
            "Checked {} expression(s) in {} file(s), {} failed\n",
            checked,
            files.len(),
            failures.len()
        ));
        output
    }
}
