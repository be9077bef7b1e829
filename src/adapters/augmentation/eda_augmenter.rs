//! EDA Augmenter - Easy Data Augmentation paraphraser.
//!
//! Produces variants of a sentence with four word-level operations:
//! synonym replacement, random insertion, random swap and random deletion.
//! Words containing a protected token are never replaced or deleted, and
//! inserted words never split them, so placeholder tokens survive verbatim.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::SynonymTable;
use crate::ports::{AugmentError, Augmenter};

/// Attempts made to find a word with synonyms before an insertion is skipped.
const INSERTION_ATTEMPTS: usize = 10;

/// Tuning of the EDA operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdaSettings {
    /// Share of words replaced by a synonym.
    pub alpha_sr: f64,
    /// Share of words inserted as synonyms of other words.
    pub alpha_ri: f64,
    /// Share of words swapped.
    pub alpha_rs: f64,
    /// Probability of deleting each unprotected word.
    pub p_rd: f64,
    /// Maximum number of augmented variants returned besides the original.
    pub num_aug: usize,
}

impl Default for EdaSettings {
    fn default() -> Self {
        Self {
            alpha_sr: 0.1,
            alpha_ri: 0.1,
            alpha_rs: 0.1,
            p_rd: 0.1,
            num_aug: 9,
        }
    }
}

/// Augmenter built on the EDA operations.
#[derive(Debug, Clone, Default)]
pub struct EdaAugmenter {
    settings: EdaSettings,
    synonyms: SynonymTable,
}

impl EdaAugmenter {
    pub fn new(settings: EdaSettings, synonyms: SynonymTable) -> Self {
        Self { settings, synonyms }
    }

    pub fn settings(&self) -> &EdaSettings {
        &self.settings
    }

    fn changes_for(alpha: f64, num_words: usize) -> usize {
        ((alpha * num_words as f64) as usize).max(1)
    }

    fn synonym_replacement(
        &self,
        words: &[String],
        count: usize,
        protected: &dyn Fn(&str) -> bool,
        rng: &mut dyn RngCore,
    ) -> Vec<String> {
        let mut out = words.to_vec();
        let mut candidates: Vec<usize> = (0..words.len())
            .filter(|&i| !protected(words[i].as_str()) && !self.synonyms.lookup(&words[i]).is_empty())
            .collect();
        candidates.shuffle(rng);

        for i in candidates.into_iter().take(count) {
            if let Some(synonym) = self.synonyms.lookup(&words[i]).choose(rng) {
                out[i] = synonym.clone();
            }
        }
        out
    }

    fn random_insertion(
        &self,
        words: &[String],
        count: usize,
        protected: &dyn Fn(&str) -> bool,
        rng: &mut dyn RngCore,
    ) -> Vec<String> {
        let mut out = words.to_vec();
        for _ in 0..count {
            for _ in 0..INSERTION_ATTEMPTS {
                let source = &out[rng.gen_range(0..out.len())];
                if protected(source.as_str()) {
                    continue;
                }
                if let Some(synonym) = self.synonyms.lookup(source).choose(rng).cloned() {
                    let at = rng.gen_range(0..=out.len());
                    out.insert(at, synonym);
                    break;
                }
            }
        }
        out
    }

    fn random_swap(words: &[String], count: usize, rng: &mut dyn RngCore) -> Vec<String> {
        let mut out = words.to_vec();
        if out.len() < 2 {
            return out;
        }
        for _ in 0..count {
            let i = rng.gen_range(0..out.len());
            let mut j = rng.gen_range(0..out.len());
            let mut attempts = 0;
            while j == i && attempts < 3 {
                j = rng.gen_range(0..out.len());
                attempts += 1;
            }
            out.swap(i, j);
        }
        out
    }

    fn random_deletion(
        words: &[String],
        p: f64,
        protected: &dyn Fn(&str) -> bool,
        rng: &mut dyn RngCore,
    ) -> Vec<String> {
        if words.len() <= 1 {
            return words.to_vec();
        }
        let kept: Vec<String> = words
            .iter()
            .filter(|w| protected(w.as_str()) || rng.gen::<f64>() > p)
            .cloned()
            .collect();
        if kept.is_empty() {
            let survivor = rng.gen_range(0..words.len());
            return vec![words[survivor].clone()];
        }
        kept
    }
}

impl Augmenter for EdaAugmenter {
    fn augment(
        &self,
        sentence: &str,
        protected: &[String],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, AugmentError> {
        let words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return Ok(vec![sentence.to_string()]);
        }

        let is_protected = |word: &str| protected.iter().any(|token| word.contains(token.as_str()));
        let settings = &self.settings;
        let per_technique = settings.num_aug / 4 + 1;
        let mut variants: Vec<String> = Vec::new();

        if settings.alpha_sr > 0.0 {
            let n = Self::changes_for(settings.alpha_sr, words.len());
            for _ in 0..per_technique {
                variants.push(self.synonym_replacement(&words, n, &is_protected, rng).join(" "));
            }
        }
        if settings.alpha_ri > 0.0 {
            let n = Self::changes_for(settings.alpha_ri, words.len());
            for _ in 0..per_technique {
                variants.push(self.random_insertion(&words, n, &is_protected, rng).join(" "));
            }
        }
        if settings.alpha_rs > 0.0 {
            let n = Self::changes_for(settings.alpha_rs, words.len());
            for _ in 0..per_technique {
                variants.push(Self::random_swap(&words, n, rng).join(" "));
            }
        }
        if settings.p_rd > 0.0 {
            for _ in 0..per_technique {
                variants.push(Self::random_deletion(&words, settings.p_rd, &is_protected, rng).join(" "));
            }
        }

        variants.shuffle(rng);
        variants.truncate(settings.num_aug);
        variants.push(sentence.to_string());

        for token in protected.iter().filter(|t| sentence.contains(t.as_str())) {
            let expected = sentence.matches(token.as_str()).count();
            if let Some(variant) = variants
                .iter()
                .find(|v| v.matches(token.as_str()).count() != expected)
            {
                return Err(AugmentError::TokenAltered {
                    token: token.clone(),
                    variant: variant.clone(),
                });
            }
        }

        Ok(variants)
    }
}
