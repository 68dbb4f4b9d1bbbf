//! Platform-applicability rules.
//!
//! Libraries and argument templates carry an ordered rule list that
//! gates them per platform. Evaluation is deny-by-default once any
//! rule is present: a non-empty list where nothing matches the current
//! platform yields `false`, not `true`.

use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether a matching rule permits or forbids the gated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    /// A match marks the entity as allowed (scan continues).
    Allow,
    /// A match forbids the entity outright (scan stops).
    Disallow,
}

/// Platform predicate attached to a rule. An absent or empty `name`
/// matches every platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OsPredicate {
    /// Metadata platform name (`windows`, `linux`, `osx`), or empty.
    #[serde(default)]
    pub name: String,
}

/// One allow/disallow directive, optionally conditioned on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// What a match means.
    pub action: RuleAction,
    /// Platform condition; `None` matches every platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<OsPredicate>,
}

impl Rule {
    /// Whether this rule's predicate matches the given platform.
    pub fn matches(&self, platform: Platform) -> bool {
        match &self.os {
            None => true,
            Some(os) if os.name.is_empty() => true,
            Some(os) => Platform::from_str(&os.name).is_ok_and(|p| p == platform),
        }
    }
}

/// Evaluate an ordered rule list against a platform.
///
/// An empty list always allows. Otherwise the scan starts from a
/// denied state: a matching [`RuleAction::Allow`] flips it to allowed
/// without stopping, and a matching [`RuleAction::Disallow`] returns
/// `false` immediately. Rules whose predicate does not match are
/// skipped, so a list with no matching rule denies.
pub fn rules_allow(rules: &[Rule], platform: Platform) -> bool {
    if rules.is_empty() {
        return true;
    }

    let mut allowed = false;
    for rule in rules {
        if !rule.matches(platform) {
            continue;
        }
        match rule.action {
            RuleAction::Allow => allowed = true,
            RuleAction::Disallow => return false,
        }
    }

    allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow(os: &str) -> Rule {
        Rule {
            action: RuleAction::Allow,
            os: predicate(os),
        }
    }

    fn disallow(os: &str) -> Rule {
        Rule {
            action: RuleAction::Disallow,
            os: predicate(os),
        }
    }

    fn predicate(os: &str) -> Option<OsPredicate> {
        if os.is_empty() {
            None
        } else {
            Some(OsPredicate { name: os.to_string() })
        }
    }

    #[test]
    fn empty_rules_allow_everywhere() {
        for platform in [Platform::Windows, Platform::Linux, Platform::MacOs] {
            assert!(rules_allow(&[], platform));
        }
    }

    #[test]
    fn bare_disallow_denies_everywhere() {
        let rules = [disallow("")];
        for platform in [Platform::Windows, Platform::Linux, Platform::MacOs] {
            assert!(!rules_allow(&rules, platform));
        }
    }

    #[test]
    fn unmatched_rules_deny_by_default() {
        let rules = [allow("windows")];
        assert!(!rules_allow(&rules, Platform::Linux));
        assert!(rules_allow(&rules, Platform::Windows));
    }

    #[test]
    fn disallow_short_circuits_regardless_of_order() {
        // allow-everywhere followed by disallow-osx: osx is denied even
        // though the allow already matched.
        let rules = [allow(""), disallow("osx")];
        assert!(!rules_allow(&rules, Platform::MacOs));
        assert!(rules_allow(&rules, Platform::Linux));

        // The reverse order gives the same answer for osx, but only
        // because disallow stops the scan before the allow is seen.
        let reversed = [disallow("osx"), allow("")];
        assert!(!rules_allow(&reversed, Platform::MacOs));
        assert!(rules_allow(&reversed, Platform::Linux));
    }

    #[test]
    fn allow_does_not_short_circuit() {
        // A later matching disallow must override an earlier allow.
        let rules = [allow("linux"), disallow("linux")];
        assert!(!rules_allow(&rules, Platform::Linux));
    }

    #[test]
    fn unknown_os_name_never_matches() {
        let rules = [allow("solaris")];
        assert!(!rules_allow(&rules, Platform::Linux));
    }

    #[test]
    fn deserializes_from_metadata_shape() {
        let rule: Rule =
            serde_json::from_str(r#"{"action": "allow", "os": {"name": "osx"}}"#).unwrap();
        assert_eq!(rule.action, RuleAction::Allow);
        assert!(rule.matches(Platform::MacOs));
        assert!(!rule.matches(Platform::Linux));

        let bare: Rule = serde_json::from_str(r#"{"action": "disallow"}"#).unwrap();
        assert!(bare.matches(Platform::Windows));
    }
}
