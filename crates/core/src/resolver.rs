//! # Week Resolver
//!
//! Reconciles recurring default slots with dated overrides (cancellations
//! and exceptional substitutions) into the effective schedule of one week.
//!
//! ## Resolution Algorithm
//!
//! The resolver indexes overrides first and lets defaults fill whatever keys
//! remain:
//!
//! 1. Sort the overrides by record id for a fixed pass order
//! 2. Index each override under its slot key: exceptional substitutions
//!    always take the key, cancellations only claim a key no override holds
//! 3. Fill every key no override claimed with its default slot
//! 4. Drop cancellation markers that had no default occurrence to suppress
//!
//! The output holds exactly one slot per distinct key, ordered by key.

use std::collections::{BTreeMap, HashSet};

use crate::models::slot::{ScheduleSlot, SlotKey};

/// Merges default slots and dated overrides into the effective week.
///
/// `defaults` holds perpetual template slots; `overrides` holds the dated
/// rows flagged canceled or exceptional that fall inside the week under
/// resolution. The result contains at most one slot per distinct
/// [`SlotKey`]:
///
/// * an exceptional substitution always wins its key, over the default and
///   over any cancellation; when several exceptional rows collide on one
///   key, the one with the highest id wins regardless of input order
/// * a cancellation claims its key only if no earlier override took it, and
///   only survives when a default existed for that key; the cancellation
///   record itself is surfaced so callers can tell a canceled occurrence
///   from a taught one by checking `is_canceled`
/// * a default fills its key only when no override claimed it
/// * a dated row carrying neither flag is skipped
///
/// With no overrides the defaults pass through unchanged.
pub fn resolve_effective_week(
    defaults: Vec<ScheduleSlot>,
    mut overrides: Vec<ScheduleSlot>,
) -> Vec<ScheduleSlot> {
    let default_keys: HashSet<SlotKey> = defaults.iter().map(ScheduleSlot::key).collect();

    // Fixed pass order so colliding exceptional rows resolve identically
    // whatever order the store returned them in.
    overrides.sort_by_key(|slot| slot.id);

    let mut indexed: BTreeMap<SlotKey, ScheduleSlot> = BTreeMap::new();

    for slot in overrides {
        let key = slot.key();

        if slot.exceptional_day {
            // Substitutions always win the key, last write takes it.
            indexed.insert(key, slot);
        } else if slot.is_canceled {
            // First cancellation holds the key, later duplicates are dropped.
            indexed.entry(key).or_insert(slot);
        }
        // Dated rows carrying neither flag have nothing to say about the
        // week and are skipped.
    }

    // Defaults never overwrite an indexed override.
    for slot in defaults {
        indexed.entry(slot.key()).or_insert(slot);
    }

    // A cancellation whose key never had a default suppresses nothing and
    // does not belong in the effective week.
    indexed.retain(|key, slot| !slot.is_cancellation() || default_keys.contains(key));

    indexed.into_values().collect()
}
