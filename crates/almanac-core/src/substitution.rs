//! Substitute holiday rules.
//!
//! A [`SubstitutionPolicy`] decides, for each holiday of a collection,
//! whether it falls on a day the provider does not observe it on and, if so,
//! where the replacement day goes. Substitutes are ordinary holidays linked
//! to their original through [`Holiday::substituted_key`].

use chrono::Weekday;
use tracing::{trace, warn};

use crate::arithmetic::next_weekday;
use crate::collection::HolidayCollection;
use crate::error::{AlmanacError, AlmanacResult};
use crate::holiday::Holiday;
use crate::types::{Date, ZonedDate};

/// Where a substitute is placed relative to its original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftRule {
    /// A fixed number of days (negative moves backwards).
    FixedDays(i64),
    /// The first given weekday strictly after the original.
    NextWeekday(Weekday),
    /// The first working day after the original.
    ///
    /// This rule always scans past holidays and weekend days.
    NextWorkingDay,
}

/// What happens when the shifted day is already a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionRule {
    /// Place the substitute regardless.
    #[default]
    Ignore,
    /// Move forward one day at a time until the day is free.
    SkipForward,
    /// Emit no substitute.
    Drop,
}

/// Substitution state of one holiday under a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionState {
    /// The holiday stands as it is.
    NotSubstituted,
    /// The holiday triggers a substitute.
    Substituted,
}

/// A substitute rule: trigger weekdays, shift, collision handling.
///
/// # Example
///
/// ```rust
/// use almanac_core::substitution::{CollisionRule, ShiftRule, SubstitutionPolicy};
/// use chrono::Weekday;
///
/// // Sunday holidays move to the next free day.
/// let policy = SubstitutionPolicy::new([Weekday::Sun], ShiftRule::FixedDays(1))
///     .with_collision(CollisionRule::SkipForward);
/// assert_eq!(policy.collision(), CollisionRule::SkipForward);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionPolicy {
    triggers: Vec<Weekday>,
    shift: ShiftRule,
    collision: CollisionRule,
    effective_from: Option<Date>,
}

impl SubstitutionPolicy {
    /// Creates a policy triggered by the given weekdays.
    pub fn new(triggers: impl IntoIterator<Item = Weekday>, shift: ShiftRule) -> Self {
        Self {
            triggers: triggers.into_iter().collect(),
            shift,
            collision: CollisionRule::Ignore,
            effective_from: None,
        }
    }

    /// Sets the collision rule.
    #[must_use]
    pub fn with_collision(mut self, collision: CollisionRule) -> Self {
        self.collision = collision;
        self
    }

    /// Only holidays on or after `date` are substituted.
    #[must_use]
    pub fn effective_from(mut self, date: Date) -> Self {
        self.effective_from = Some(date);
        self
    }

    /// Trigger weekdays.
    pub fn triggers(&self) -> &[Weekday] {
        &self.triggers
    }

    /// Shift rule.
    pub fn shift(&self) -> ShiftRule {
        self.shift
    }

    /// Collision rule.
    pub fn collision(&self) -> CollisionRule {
        self.collision
    }

    /// Whether `holiday` is substituted under this policy.
    ///
    /// Substitutes themselves are never substituted again.
    pub fn state_of(&self, holiday: &Holiday) -> SubstitutionState {
        if holiday.is_substitute() {
            return SubstitutionState::NotSubstituted;
        }
        if let Some(from) = self.effective_from {
            if holiday.day() < from {
                return SubstitutionState::NotSubstituted;
            }
        }
        if self.triggers.contains(&holiday.date().weekday()) {
            SubstitutionState::Substituted
        } else {
            SubstitutionState::NotSubstituted
        }
    }

    fn collides(&self, collection: &HolidayCollection, candidate: ZonedDate) -> bool {
        collection.is_holiday(candidate)
            || (self.shift == ShiftRule::NextWorkingDay && collection.is_weekend_day(candidate))
    }

    /// Day the substitute of `holiday` would be placed on, given the
    /// holidays already in `collection`.
    ///
    /// Returns `None` if the holiday is not substituted or the collision
    /// rule drops the substitute.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::Internal` if a forward scan does not find a
    /// free day within `collection.len() + 7` steps, and
    /// `AlmanacError::InvalidDate` if the shift leaves the supported range.
    pub fn target(
        &self,
        holiday: &Holiday,
        collection: &HolidayCollection,
    ) -> AlmanacResult<Option<ZonedDate>> {
        if self.state_of(holiday) == SubstitutionState::NotSubstituted {
            return Ok(None);
        }

        let origin = holiday.date();
        let candidate = match self.shift {
            ShiftRule::FixedDays(days) => origin.checked_add_days(days)?,
            ShiftRule::NextWeekday(weekday) => next_weekday(origin, weekday),
            ShiftRule::NextWorkingDay => origin.checked_add_days(1)?,
        };

        let collision = match self.shift {
            ShiftRule::NextWorkingDay => CollisionRule::SkipForward,
            _ => self.collision,
        };

        match collision {
            CollisionRule::Ignore => Ok(Some(candidate)),
            CollisionRule::Drop if self.collides(collection, candidate) => {
                warn!(
                    key = holiday.key(),
                    candidate = %candidate.date(),
                    "substitute collides with an existing holiday, dropped"
                );
                Ok(None)
            }
            CollisionRule::Drop => Ok(Some(candidate)),
            CollisionRule::SkipForward => {
                let limit = collection.len() + 7;
                let mut day = candidate;
                for _ in 0..limit {
                    if !self.collides(collection, day) {
                        return Ok(Some(day));
                    }
                    day = day.checked_add_days(1)?;
                }
                warn!(key = holiday.key(), limit, "substitute scan exhausted");
                Err(AlmanacError::internal(format!(
                    "no free day for the substitute of '{}' within {limit} days of {}",
                    holiday.key(),
                    candidate.date()
                )))
            }
        }
    }

    /// Emits substitutes for every eligible holiday of the collection.
    ///
    /// Holidays are visited chronologically and each substitute is added
    /// before the next holiday is examined, so later scans see earlier
    /// substitutes. Returns the number of substitutes added.
    ///
    /// # Errors
    ///
    /// Propagates scan exhaustion from [`target`](Self::target).
    pub fn apply(&self, collection: &mut HolidayCollection) -> AlmanacResult<usize> {
        let keys: Vec<String> = collection
            .iter()
            .filter(|h| !h.is_substitute())
            .map(|h| h.key().to_string())
            .collect();
        self.apply_keys(collection, keys.iter().map(String::as_str))
    }

    /// Emits substitutes for the listed holidays only; absent keys are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Propagates scan exhaustion from [`target`](Self::target).
    pub fn apply_to(
        &self,
        collection: &mut HolidayCollection,
        keys: &[&str],
    ) -> AlmanacResult<usize> {
        let mut ordered: Vec<(Date, &str)> = keys
            .iter()
            .filter_map(|k| collection.get(k).ok().flatten().map(|h| (h.day(), *k)))
            .collect();
        ordered.sort_by_key(|(day, _)| *day);
        self.apply_keys(collection, ordered.into_iter().map(|(_, k)| k))
    }

    fn apply_keys<'k>(
        &self,
        collection: &mut HolidayCollection,
        keys: impl Iterator<Item = &'k str>,
    ) -> AlmanacResult<usize> {
        let mut added = 0;
        for key in keys {
            if collection.substitute_of(key).is_some() {
                continue;
            }
            let Some(original) = collection.get(key)?.cloned() else {
                continue;
            };
            if let Some(day) = self.target(&original, collection)? {
                trace!(
                    key,
                    original = %original.day(),
                    substitute = %day.date(),
                    "substitute emitted"
                );
                collection.add(Holiday::substitute(&original, day));
                added += 1;
            }
        }
        Ok(added)
    }
}
