//! Argument-template expansion.
//!
//! Templates are expanded in three steps per token: substitute
//! `${name}` placeholders from the variable table, drop tokens on the
//! managed-launch denylist, and drop tokens that still contain an
//! unresolved placeholder. The whole template is gated by one rule
//! evaluation — either all of its tokens are considered or none are.

use crate::vars::VariableTable;
use javelin_schema::{ArgumentTemplate, Platform, rules_allow};
use regex::Regex;
use std::collections::HashSet;

/// Tokens that are meaningless for a managed, headless launch:
/// window sizing, demo mode, quick-play variants, client telemetry
/// identifiers, and launcher-brand properties. Compared against the
/// fully substituted token, exact match only.
const DENYLIST: &[&str] = &[
    "-Dminecraft.launcher.brand=",
    "-Dminecraft.launcher.version=",
    "--quickPlayPath",
    "--quickPlaySingleplayer",
    "--quickPlayMultiplayer",
    "--quickPlayRealms",
    "--width",
    "--height",
    "--demo",
    "--xuid",
];

/// Expands argument templates into literal tokens.
///
/// Owns its placeholder pattern and denylist as immutable values, so
/// expansion is a pure function of its inputs: identical
/// `(templates, variables, platform)` always yield byte-identical
/// output.
#[derive(Debug)]
pub struct ArgumentExpander {
    placeholder: Regex,
    denylist: HashSet<&'static str>,
}

impl Default for ArgumentExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentExpander {
    /// Create an expander with the standard denylist.
    pub fn new() -> Self {
        // The pattern is a literal; it cannot fail to compile.
        let placeholder =
            Regex::new(r"\$\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid");
        Self {
            placeholder,
            denylist: DENYLIST.iter().copied().collect(),
        }
    }

    /// Replace every `${name}` occurrence using `variables`. An
    /// unknown name is left as the literal `${name}` text.
    pub fn substitute(&self, input: &str, variables: &VariableTable) -> String {
        self.placeholder
            .replace_all(input, |caps: &regex::Captures<'_>| {
                match variables.get(&caps[1]) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Expand templates in order into a flat token sequence.
    ///
    /// A template whose rules deny `platform` contributes nothing.
    /// Within an allowed template, each token is substituted, then
    /// dropped if it is denylisted or still contains `${`.
    pub fn expand(
        &self,
        templates: &[ArgumentTemplate],
        variables: &VariableTable,
        platform: Platform,
    ) -> Vec<String> {
        let mut result = Vec::new();
        for template in templates {
            if !rules_allow(&template.rules, platform) {
                continue;
            }
            for token in &template.value {
                let token = self.substitute(token, variables);

                if self.denylist.contains(token.as_str()) {
                    continue;
                }
                if token.contains("${") {
                    continue;
                }

                result.push(token);
            }
        }
        result
    }

    /// Expand a legacy single-string argument field: substitute once,
    /// then split on runs of whitespace. No rule or denylist filtering
    /// applies to this path.
    pub fn expand_legacy(&self, legacy: &str, variables: &VariableTable) -> Vec<String> {
        self.substitute(legacy, variables)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
