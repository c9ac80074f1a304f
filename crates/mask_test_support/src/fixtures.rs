use crate::diff_states;
use mask_core::{FieldState, TextFormatter, format_state, parse_keys, parse_state};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const EDIT_FIXTURE_FORMAT_V1: &str = "mask-edit-v1";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EditFixture {
    pub format: String,
    #[serde(rename = "suite", default)]
    pub suites: Vec<EditSuite>,
}

/// Named sequence of steps, each checked independently.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EditSuite {
    pub name: String,
    pub steps: Vec<EditStep>,
}

/// Typing `keys` into a field in state `from` yields `to`; a missing `to`
/// means the field must not change.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EditStep {
    pub keys: String,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
}

impl EditStep {
    pub fn expected(&self) -> &str {
        self.to.as_deref().unwrap_or(&self.from)
    }
}

pub fn load_edit_fixture(path: &Path) -> EditFixture {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read edit fixture {path:?}: {err}"));
    let fixture: EditFixture = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse edit fixture {path:?}: {err}"));
    assert_eq!(
        fixture.format, EDIT_FIXTURE_FORMAT_V1,
        "unsupported edit fixture format in {path:?}"
    );

    let mut names = BTreeSet::new();
    for suite in &fixture.suites {
        assert!(
            names.insert(suite.name.as_str()),
            "duplicate suite name in {path:?}: {}",
            suite.name
        );
        assert!(!suite.steps.is_empty(), "suite '{}' has no steps", suite.name);
    }
    fixture
}

/// Apply every key of `keys` in order, keeping the state on rejection.
pub fn replay<F: TextFormatter>(formatter: &F, from: FieldState, keys: &str) -> FieldState {
    parse_keys(keys).iter().fold(from, |state, edit| {
        formatter
            .translate_edit(&state.text, state.caret, edit)
            .into_state(&state.text, state.caret)
    })
}

pub fn run_step<F: TextFormatter>(formatter: &F, step: &EditStep) -> Result<(), String> {
    let from = parse_state(&step.from)?;
    let expected = parse_state(step.expected())?;
    let actual = replay(formatter, from, &step.keys);
    if actual == expected {
        return Ok(());
    }
    Err(format!(
        "typing {:?} into {:?}\n{}",
        step.keys,
        step.from,
        diff_states(&format_state(&expected), &format_state(&actual))
    ))
}

/// Outcome of running a fixture.
#[derive(Debug, Default)]
pub struct FixtureReport {
    pub ran: usize,
    pub failures: Vec<String>,
}

/// Run every step of the suites whose name contains `filter` (all suites
/// when `None`), collecting one message per failing step.
pub fn run_fixture<F: TextFormatter>(
    formatter: &F,
    fixture: &EditFixture,
    filter: Option<&str>,
) -> FixtureReport {
    let mut report = FixtureReport::default();
    for suite in &fixture.suites {
        if filter.is_some_and(|f| !suite.name.contains(f)) {
            continue;
        }
        for (index, step) in suite.steps.iter().enumerate() {
            report.ran += 1;
            if let Err(err) = run_step(formatter, step) {
                report
                    .failures
                    .push(format!("[{}] step {}: {err}", suite.name, index + 1));
            }
        }
    }
    report
}
