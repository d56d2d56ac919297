//! Skill equivalence rules
//!
//! Two matchers decide whether a resume skill and a job requirement name the same thing:
//! [`LooseContains`] keeps the permissive substring behaviour (so "java" matches
//! "javascript", and an empty string matches everything), while [`TokenAlias`] compares
//! whole tokens after alias folding and is the default.

use crate::config::MatchMode;
use regex::Regex;
use std::collections::HashMap;

/// Decides whether two free-text skill strings denote the same skill
pub trait SkillMatcher: Send + Sync {
    fn matches(&self, resume_skill: &str, requirement: &str) -> bool;

    fn mode(&self) -> MatchMode;

    /// True when any of the resume skills is accepted for the requirement
    fn matches_any(&self, resume_skills: &[&str], requirement: &str) -> bool {
        resume_skills
            .iter()
            .any(|skill| self.matches(skill, requirement))
    }
}

/// Build the matcher selected in configuration
pub fn matcher_for(mode: MatchMode) -> Box<dyn SkillMatcher> {
    match mode {
        MatchMode::Strict => Box::new(TokenAlias::new()),
        MatchMode::Loose => Box::new(LooseContains),
    }
}

/// Case-insensitive containment in either direction, then `.js`/`js` alias folding
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseContains;

impl LooseContains {
    /// Drop the first ".js", then rewrite the first "js" to "javascript"
    fn fold(skill: &str) -> String {
        skill.replacen(".js", "", 1).replacen("js", "javascript", 1)
    }
}

impl SkillMatcher for LooseContains {
    fn matches(&self, resume_skill: &str, requirement: &str) -> bool {
        let skill = resume_skill.to_lowercase();
        let requirement = requirement.to_lowercase();

        requirement.contains(&skill)
            || skill.contains(&requirement)
            || Self::fold(&requirement) == Self::fold(&skill)
    }

    fn mode(&self) -> MatchMode {
        MatchMode::Loose
    }
}

/// Whole-token comparison through an alias table
pub struct TokenAlias {
    js_suffix: Regex,
    token: Regex,
    aliases: HashMap<&'static str, &'static str>,
}

impl Default for TokenAlias {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenAlias {
    pub fn new() -> Self {
        let js_suffix = Regex::new(r"([\p{L}\p{N}])\.js\b").expect("Invalid js suffix regex");
        let token = Regex::new(r"[\p{L}\p{N}+#]+").expect("Invalid token regex");

        Self {
            js_suffix,
            token,
            aliases: Self::default_aliases(),
        }
    }

    /// Lowercased, alias-folded tokens of a skill string
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = self.js_suffix.replace_all(&lowered, "$1");

        self.token
            .find_iter(&stripped)
            .map(|m| {
                let token = m.as_str();
                self.aliases
                    .get(token)
                    .map(|alias| alias.to_string())
                    .unwrap_or_else(|| token.to_string())
            })
            .collect()
    }

    fn default_aliases() -> HashMap<&'static str, &'static str> {
        [
            ("js", "javascript"),
            ("ecmascript", "javascript"),
            ("ts", "typescript"),
            ("nodejs", "node"),
            ("reactjs", "react"),
            ("vuejs", "vue"),
            ("nextjs", "next"),
            ("expressjs", "express"),
            ("angularjs", "angular"),
            ("k8s", "kubernetes"),
            ("postgres", "postgresql"),
            ("golang", "go"),
            ("py", "python"),
            ("apis", "api"),
        ]
        .into_iter()
        .collect()
    }
}

fn contains_run(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|window| window == needle)
}

impl SkillMatcher for TokenAlias {
    fn matches(&self, resume_skill: &str, requirement: &str) -> bool {
        let skill_tokens = self.tokens(resume_skill);
        let requirement_tokens = self.tokens(requirement);

        // Punctuation-only strings carry no tokens; compare them whole
        if skill_tokens.is_empty() || requirement_tokens.is_empty() {
            let skill = resume_skill.trim().to_lowercase();
            return !skill.is_empty() && skill == requirement.trim().to_lowercase();
        }

        contains_run(&requirement_tokens, &skill_tokens) || contains_run(&skill_tokens, &requirement_tokens)
    }

    fn mode(&self) -> MatchMode {
        MatchMode::Strict
    }
}
