use rand::{Rng, seq::SliceRandom};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{common::server_error::ServerError, quiz::word_bank::Category};

pub const DEFAULT_CATEGORY: &str = "fruits";
pub const DEFAULT_COUNT: usize = 10;
pub const MAX_COUNT: usize = 20;
pub const CHOICE_COUNT: usize = 4;
pub const MASK: char = '_';

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/300x300";

#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    pub category: Option<String>,
    pub n: Option<String>,
}

impl QuizQuery {
    pub fn raw_category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Reads the leading integer (`"5abc"` is 5, `"7.5"` is 7). Unparsable
    /// or zero falls back to the default, then clamps to `[1, MAX_COUNT]`.
    pub fn requested_count(&self) -> usize {
        let parsed = self
            .n
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|n| *n != 0)
            .unwrap_or(DEFAULT_COUNT as i64);

        parsed.clamp(1, MAX_COUNT as i64) as usize
    }
}

pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: Vec<i64> = digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));

    Some(if negative { -value } else { value })
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizItem {
    pub word: String,
    pub shown: String,
    pub img: String,
    pub choices: Vec<char>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub ok: bool,
    pub category: String,
    pub count: usize,
    pub items: Vec<QuizItem>,
}

impl QuizResponse {
    pub fn new(category: &str, items: Vec<QuizItem>) -> Self {
        Self {
            ok: true,
            category: category.to_string(),
            count: items.len(),
            items,
        }
    }
}

pub fn pick_words<R: Rng + ?Sized>(
    category: &Category,
    requested: usize,
    rng: &mut R,
) -> Vec<&'static str> {
    let count = requested.min(category.words.len()).min(MAX_COUNT);
    let mut words = category.words.to_vec();
    words.shuffle(rng);
    words.truncate(count);
    words
}

pub fn mask_word(word: &str) -> Result<String, ServerError> {
    let mut chars = word.chars();
    if chars.next().is_none() {
        return Err(ServerError::Internal("Word bank contains an empty word".into()));
    }

    Ok(format!("{}{}", MASK, chars.as_str()))
}

/// The correct first letter plus three distinct distractors, shuffled.
pub fn generate_choices<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<Vec<char>, ServerError> {
    let correct = word
        .chars()
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .ok_or_else(|| {
            ServerError::Internal(format!("Word '{}' does not start with a letter", word))
        })?;

    let mut pool: Vec<char> = ALPHABET.chars().filter(|c| *c != correct).collect();
    pool.shuffle(rng);

    let mut choices: Vec<char> = pool.into_iter().take(CHOICE_COUNT - 1).collect();
    choices.push(correct);
    choices.shuffle(rng);

    Ok(choices)
}

pub fn fallback_img(category: &Category, word: &str) -> String {
    if let Some(url) = category.fallback_img {
        return url.to_string();
    }

    match Url::parse_with_params(PLACEHOLDER_BASE, &[("text", word)]) {
        Ok(url) => url.to_string(),
        Err(_) => PLACEHOLDER_BASE.to_string(),
    }
}
