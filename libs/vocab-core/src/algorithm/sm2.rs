//! SM-2 spaced repetition scheduling.
//!
//! Based on SuperMemo 2 with the classic 1 day / 6 day opening intervals and
//! configurable ease adjustments.

use super::Scheduler;
use crate::types::{Rating, WordRecord, WordStatus, INITIAL_EASE, MINIMUM_EASE};
use chrono::{Days, NaiveDate};

/// SM-2 scheduler with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Subtracted from the ease on a miss.
    pub lapse_penalty: f64,
    pub hard_bonus: f64,
    pub good_bonus: f64,
    pub easy_bonus: f64,
    pub first_interval: u32,
    pub second_interval: u32,
    pub maximum_interval: u32,
    /// Consecutive correct reviews after which a word counts as validated.
    pub validated_after: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: INITIAL_EASE,
            minimum_ease: MINIMUM_EASE,
            lapse_penalty: 0.2,
            hard_bonus: 0.05,
            good_bonus: 0.1,
            easy_bonus: 0.15,
            first_interval: 1,
            second_interval: 6,
            maximum_interval: 36500,
            validated_after: 3,
        }
    }
}

impl Scheduler for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn review(&self, word: &WordRecord, rating: Rating, today: NaiveDate) -> WordRecord {
        let mut next = word.clone();

        if rating.is_correct() {
            next.repetitions = word.repetitions.saturating_add(1);
            next.interval_days = match next.repetitions {
                1 => self.first_interval,
                2 => self.second_interval,
                _ => self.grow_interval(word.interval_days, word.easiness_factor),
            };
            next.easiness_factor = self.clamp_ease(word.easiness_factor + self.ease_bonus(rating));
            next.status = if next.repetitions >= self.validated_after {
                WordStatus::Validated
            } else {
                WordStatus::Learning
            };
        } else {
            // Lapse: start over from the first interval
            next.repetitions = 0;
            next.interval_days = self.first_interval;
            next.easiness_factor = self.clamp_ease(word.easiness_factor - self.lapse_penalty);
            next.lapses = word.lapses.saturating_add(1);
            next.status = WordStatus::Learning;
        }

        next.due_date = today
            .checked_add_days(Days::new(u64::from(next.interval_days)))
            .unwrap_or(NaiveDate::MAX);
        next
    }
}

impl Sm2 {
    fn ease_bonus(&self, rating: Rating) -> f64 {
        match rating {
            Rating::Again => 0.0,
            Rating::Hard => self.hard_bonus,
            Rating::Good => self.good_bonus,
            Rating::Easy => self.easy_bonus,
        }
    }

    fn grow_interval(&self, interval: u32, ease: f64) -> u32 {
        let grown = (f64::from(interval) * ease).round();
        (grown as u32).clamp(1, self.maximum_interval)
    }

    /// Round to two decimals, never below the floor.
    fn clamp_ease(&self, ease: f64) -> f64 {
        let rounded = (ease * 100.0).round() / 100.0;
        if rounded.is_nan() {
            return self.initial_ease;
        }
        rounded.max(self.minimum_ease)
    }
}
