use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RuleError;
use crate::rule::Rule;

/// Loads an ordered rule list from a file, or from every `json`/`yaml`/`yml`
/// file of a directory taken in file-name order.
pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<Rule>, RuleError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RuleError::MissingPath(path.display().to_string()));
    }

    let rules = if path.is_dir() {
        load_from_directory(path)?
    } else {
        load_from_file(path)?
    };

    if rules.is_empty() {
        return Err(RuleError::EmptyRuleSet {
            path: path.display().to_string(),
        });
    }

    ensure_unique_names(&rules)?;
    Ok(rules)
}

fn load_from_directory(path: &Path) -> Result<Vec<Rule>, RuleError> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(path).map_err(|err| RuleError::from_io(path, err))? {
        let entry = entry.map_err(|err| RuleError::from_io(path, err))?;
        let file_type = entry
            .file_type()
            .map_err(|err| RuleError::from_io(entry.path(), err))?;
        if file_type.is_dir() {
            continue;
        }

        let candidate = entry.path();
        if let Some(ext) = candidate.extension().and_then(|value| value.to_str()) {
            if matches!(ext, "json" | "yaml" | "yml") {
                files.push(candidate);
            }
        }
    }
    files.sort();

    let mut rules = Vec::new();
    for file in files {
        let mut file_rules = load_from_file(&file)?;
        rules.append(&mut file_rules);
    }

    Ok(rules)
}

fn load_from_file(path: &Path) -> Result<Vec<Rule>, RuleError> {
    let raw = fs::read_to_string(path).map_err(|err| RuleError::from_io(path, err))?;
    parse_rules(&raw, path)
}

fn parse_rules(raw: &str, path: &Path) -> Result<Vec<Rule>, RuleError> {
    let mut attempts = Vec::new();

    // YAML is a superset of JSON, so one parser covers both extensions.
    match serde_yaml::from_str::<RuleDocument>(raw) {
        Ok(doc) => return Ok(doc.rules),
        Err(err) => attempts.push(format!("rules document ({err})")),
    }

    match serde_yaml::from_str::<Vec<Rule>>(raw) {
        Ok(list) => return Ok(list),
        Err(err) => attempts.push(format!("list ({err})")),
    }

    match serde_yaml::from_str::<Rule>(raw) {
        Ok(rule) => return Ok(vec![rule]),
        Err(err) => attempts.push(format!("single rule ({err})")),
    }

    let message = format!("unable to parse rules file: {}", attempts.join("; "));
    Err(RuleError::parse_error(path.to_path_buf(), message))
}

fn ensure_unique_names(rules: &[Rule]) -> Result<(), RuleError> {
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.name.as_str()) {
            return Err(RuleError::DuplicateRule {
                name: rule.name.clone(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleDocument {
    rules: Vec<Rule>,
}
