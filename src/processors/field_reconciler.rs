use crate::models::{BlockKind, FieldBlock};
use crate::utils::constants::HOUR_TO_DAY_FIELDS;

/// Rewrites hour-suffixed extreme-time fields into their day-suffixed names.
///
/// Some stations label monthly/yearly "time of extreme" fields with the daily
/// block's `...hora` names. A non-empty hour value is copied to the `...dia`
/// field and the hour key is always dropped.
pub struct FieldReconciler {
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldReconciler {
    pub fn new() -> Self {
        Self {
            pairs: HOUR_TO_DAY_FIELDS,
        }
    }

    /// Apply to a block of the given kind; blocks other than monthly/yearly are untouched.
    pub fn reconcile(&self, kind: BlockKind, block: &mut FieldBlock) {
        if kind.uses_day_suffix() {
            self.reconcile_block(block);
        }
    }

    pub fn reconcile_block(&self, block: &mut FieldBlock) {
        for (hour_field, day_field) in self.pairs {
            let hour_value = block
                .value(hour_field)
                .filter(|v| !v.is_empty())
                .map(str::to_string);

            if let Some(value) = hour_value {
                block.insert(*day_field, Some(value));
            }
            block.remove(hour_field);
        }
    }
}

impl Default for FieldReconciler {
    fn default() -> Self {
        Self::new()
    }
}
