//! Heuristic resume scoring
//!
//! The scorer is a total function: any input string, including the empty
//! string, produces a result. Every numeric path has an explicit floor and
//! ceiling, so no resume can score outside [0,100] on any axis.

use crate::processing::catalog::{
    SkillCatalog, ATS_ADVICE, ATS_HINTS, EXPERIENCE_ADVICE, EXPERIENCE_INDICATORS, IMPACT_ADVICE,
    IMPACT_VERBS, SKILLS_ADVICE,
};
use crate::processing::text_processor::TextProcessor;
use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cap on the reported missing-skills list.
pub const MAX_MISSING_SKILLS: usize = 10;

/// Each advisory rule fires when its score dimension falls below this.
const ADVICE_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub overall: u8,
    pub skills_coverage: u8,
    pub experience_relevance: u8,
    pub ats_readiness: u8,
    pub impact: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scores: Scores,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Resume scorer with precompiled pattern matchers
pub struct ResumeScorer {
    default_catalog: SkillCatalog,
    text_processor: TextProcessor,
    experience_matcher: AhoCorasick,
    year_regex: Regex,
    impact_regex: Regex,
}

impl Default for ResumeScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeScorer {
    pub fn new() -> Self {
        // Leftmost-first keeps alternation order significant ("lead" wins
        // over "led" when both match at the same position).
        let experience_matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(EXPERIENCE_INDICATORS)
            .expect("Invalid experience indicator set");

        let year_regex = Regex::new(r"\b[0-9]{4}\b").expect("Invalid year regex");

        let impact_pattern = format!(r"\b(?:{})\b", IMPACT_VERBS.join("|"));
        let impact_regex = Regex::new(&impact_pattern).expect("Invalid impact verb regex");

        Self {
            default_catalog: SkillCatalog::default(),
            text_processor: TextProcessor::new(),
            experience_matcher,
            year_regex,
            impact_regex,
        }
    }

    /// Score resume text against the default skill catalog.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.score(text, &self.default_catalog)
    }

    /// Score resume text against a job-specific catalog.
    /// An empty catalog falls back to the default one.
    pub fn analyze_with_catalog(&self, text: &str, target: &SkillCatalog) -> AnalysisResult {
        let catalog = if target.is_empty() {
            &self.default_catalog
        } else {
            target
        };
        self.score(text, catalog)
    }

    pub fn default_catalog(&self) -> &SkillCatalog {
        &self.default_catalog
    }

    fn score(&self, text: &str, catalog: &SkillCatalog) -> AnalysisResult {
        let lower = text.to_lowercase();
        let tokens = self.text_processor.token_set(&lower);

        // Exact token membership only. Catalog phrases with punctuation
        // ("next.js") never match a single token and stay in the missing list.
        let found: HashSet<&str> = catalog.iter().filter(|s| tokens.contains(*s)).collect();

        let skills_coverage = Self::skills_coverage_score(found.len(), catalog.len());
        let experience_relevance = self.experience_score(text, &lower);
        let ats_readiness = Self::ats_score(&lower);
        let impact = self.impact_score(&lower);
        let overall =
            Self::overall_score(skills_coverage, experience_relevance, ats_readiness, impact);

        let missing_skills: Vec<String> = catalog
            .iter()
            .filter(|s| !found.contains(*s))
            .take(MAX_MISSING_SKILLS)
            .map(|s| s.to_string())
            .collect();

        let mut recommendations = Vec::new();
        if skills_coverage < ADVICE_THRESHOLD {
            recommendations.push(SKILLS_ADVICE.to_string());
        }
        if experience_relevance < ADVICE_THRESHOLD {
            recommendations.push(EXPERIENCE_ADVICE.to_string());
        }
        if ats_readiness < ADVICE_THRESHOLD {
            recommendations.push(ATS_ADVICE.to_string());
        }
        if impact < ADVICE_THRESHOLD {
            recommendations.push(IMPACT_ADVICE.to_string());
        }

        AnalysisResult {
            scores: Scores {
                overall,
                skills_coverage,
                experience_relevance,
                ats_readiness,
                impact,
            },
            missing_skills,
            recommendations,
        }
    }

    /// Coverage against the active catalog. The denominator floor of 8 keeps
    /// short catalogs from trivially reaching 100%.
    fn skills_coverage_score(found: usize, catalog_len: usize) -> u8 {
        let denominator = (catalog_len as f64 / 2.0).max(8.0);
        let raw = (found as f64 / denominator * 100.0).round();
        raw.min(100.0) as u8
    }

    /// Substring occurrence count of the experience indicators, 10 points
    /// each, plus 10 for a standalone 4-digit year. Floored at 20.
    fn experience_score(&self, raw_text: &str, lower: &str) -> u8 {
        let hits = self.experience_matcher.find_iter(lower).count() as i64;
        let year_bonus = if self.year_regex.is_match(raw_text) {
            10
        } else {
            0
        };
        (hits * 10 + year_bonus).clamp(20, 100) as u8
    }

    /// Presence count of section/contact hints. Base of 40: most documents
    /// parse at all.
    fn ats_score(lower: &str) -> u8 {
        let hits = ATS_HINTS.iter().filter(|hint| lower.contains(*hint)).count() as i64;
        (40 + hits * 6).min(100) as u8
    }

    /// Whole-word occurrence count of the impact verbs.
    fn impact_score(&self, lower: &str) -> u8 {
        let hits = self.impact_regex.find_iter(lower).count() as i64;
        (30 + hits * 8).clamp(20, 100) as u8
    }

    /// Weighted mean. The weights are fixed design constants.
    fn overall_score(skills: u8, experience: u8, ats: u8, impact: u8) -> u8 {
        (0.3 * f64::from(skills)
            + 0.25 * f64::from(experience)
            + 0.25 * f64::from(ats)
            + 0.2 * f64::from(impact))
        .round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> ResumeScorer {
        ResumeScorer::new()
    }

    #[test]
    fn test_empty_text_floor_scores() {
        let result = scorer().analyze("");

        assert_eq!(result.scores.skills_coverage, 0);
        assert_eq!(result.scores.experience_relevance, 20);
        assert_eq!(result.scores.ats_readiness, 40);
        assert_eq!(result.scores.impact, 30);
        assert_eq!(result.scores.overall, 21);
    }

    #[test]
    fn test_empty_text_fires_all_advice() {
        let result = scorer().analyze("");

        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(result.recommendations[0], SKILLS_ADVICE);
        assert_eq!(result.recommendations[3], IMPACT_ADVICE);
    }

    #[test]
    fn test_all_default_skills_reach_full_coverage() {
        let text = "javascript typescript react next.js node python java sql aws docker \
                    kubernetes graphql rest ci cd testing jest cypress tailwind css html \
                    git agile scrum";
        let result = scorer().analyze(text);

        assert_eq!(result.scores.skills_coverage, 100);
        // "next.js" splits into the tokens "next" and "js", so the phrase
        // itself is never found.
        assert_eq!(result.missing_skills, vec!["next.js".to_string()]);
    }

    #[test]
    fn test_scores_within_range_for_arbitrary_text() {
        let texts = [
            "",
            "a",
            "experience experience experience experience experience experience \
             experience experience experience experience experience experience",
            "improved reduced increased optimized led delivered achieved drove owned \
             launched built shipped improved reduced increased optimized led delivered",
            "summary experience education skills projects contact email phone github linkedin",
        ];

        for text in texts {
            let result = scorer().analyze(text);
            let scores = result.scores;
            for value in [
                scores.overall,
                scores.skills_coverage,
                scores.experience_relevance,
                scores.ats_readiness,
                scores.impact,
            ] {
                assert!(value <= 100, "score {} out of range for {:?}", value, text);
            }
        }
    }

    #[test]
    fn test_overall_is_the_weighted_mean() {
        let result = scorer().analyze(
            "Senior engineer with 8 years experience. Led projects, improved deployment, \
             skills: python, docker, aws. Contact: email, github.",
        );
        let scores = result.scores;

        let expected = (0.3 * f64::from(scores.skills_coverage)
            + 0.25 * f64::from(scores.experience_relevance)
            + 0.25 * f64::from(scores.ats_readiness)
            + 0.2 * f64::from(scores.impact))
        .round() as u8;
        assert_eq!(scores.overall, expected);
    }

    #[test]
    fn test_word_boundary_blocks_ledger() {
        let s = scorer();
        let without = s.analyze("ledger ledger ledger");
        let with = s.analyze("led");

        assert_eq!(without.scores.impact, 30);
        assert_eq!(with.scores.impact, 38);
    }

    #[test]
    fn test_impact_monotonic_in_verb_occurrences() {
        let s = scorer();
        let mut previous = s.analyze("").scores.impact;
        let mut text = String::new();
        for _ in 0..16 {
            text.push_str("shipped ");
            let current = s.analyze(&text).scores.impact;
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_experience_substring_and_year_bonus() {
        let s = scorer();

        // "experienced" still contains "experience"
        assert_eq!(
            s.analyze("experienced experienced experienced")
                .scores
                .experience_relevance,
            30
        );
        // two indicator hits plus the 4-digit year bonus
        assert_eq!(
            s.analyze("experience experience 2021")
                .scores
                .experience_relevance,
            30
        );
        // the bonus alone stays under the floor
        assert_eq!(s.analyze("2021").scores.experience_relevance, 20);
        // a 5-digit number is not a year
        assert_eq!(s.analyze("12345").scores.experience_relevance, 20);
    }

    #[test]
    fn test_ats_hint_counting() {
        let s = scorer();

        assert_eq!(s.analyze("no section headings here").scores.ats_readiness, 40);
        assert_eq!(
            s.analyze("summary education projects").scores.ats_readiness,
            58
        );
        // repeats of one hint count once
        assert_eq!(
            s.analyze("summary summary summary").scores.ats_readiness,
            46
        );
        let all_hints =
            "summary experience education skills projects contact email phone github linkedin";
        assert_eq!(s.analyze(all_hints).scores.ats_readiness, 100);
    }

    #[test]
    fn test_missing_skills_capped_and_ordered() {
        let result = scorer().analyze("");

        assert_eq!(result.missing_skills.len(), MAX_MISSING_SKILLS);
        assert_eq!(result.missing_skills[0], "javascript");
        assert_eq!(result.missing_skills[9], "docker");
    }

    #[test]
    fn test_missing_skills_disjoint_from_found() {
        let result = scorer().analyze("python docker aws");

        for skill in ["python", "docker", "aws"] {
            assert!(!result.missing_skills.contains(&skill.to_string()));
        }
    }

    #[test]
    fn test_custom_catalog_denominator_floor() {
        let s = scorer();
        let catalog = SkillCatalog::from_keywords(["rust", "tokio"]);
        let result = s.analyze_with_catalog("rust all day", &catalog);

        // found 1, denominator max(8, 1) = 8
        assert_eq!(result.scores.skills_coverage, 13);
        assert_eq!(result.missing_skills, vec!["tokio".to_string()]);
    }

    #[test]
    fn test_empty_custom_catalog_falls_back_to_default() {
        let s = scorer();
        let empty = SkillCatalog::from_keywords(Vec::<String>::new());
        let via_empty = s.analyze_with_catalog("python react", &empty);
        let via_default = s.analyze("python react");

        assert_eq!(via_empty, via_default);
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        let s = scorer();
        let text = "Senior engineer, led migrations, improved uptime. Skills: python, aws.";

        let first = s.analyze(text);
        let second = s.analyze(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let s = scorer();
        let lower = s.analyze("python docker led");
        let upper = s.analyze("PYTHON Docker LED");

        assert_eq!(lower, upper);
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let result = scorer().analyze("python");
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["scores"]["skillsCoverage"].is_number());
        assert!(json["scores"]["experienceRelevance"].is_number());
        assert!(json["scores"]["atsReadiness"].is_number());
        assert!(json["missingSkills"].is_array());
        assert!(json["recommendations"].is_array());
    }
}
