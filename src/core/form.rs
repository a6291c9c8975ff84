use crate::core::policy::{EntryErrors, RuleViolation, ValidationPolicy};
use crate::domain::model::{Field, FieldState, RecordEntry, Snapshot};
use crate::utils::error::{FormError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Slot {
    entry: RecordEntry,
    touched: [bool; 3],
}

impl Slot {
    fn touch(&mut self, field: Field) {
        self.touched[field.slot()] = true;
    }

    fn is_touched(&self, field: Field) -> bool {
        self.touched[field.slot()]
    }
}

/// An ordered, repeatable list of user-info entries checked against one policy.
///
/// Validity is never stored: every accessor re-derives it from the current
/// values, so edits are reflected immediately.
#[derive(Debug, Clone)]
pub struct RecordListForm {
    slots: Vec<Slot>,
    policy: &'static ValidationPolicy,
}

impl Default for RecordListForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RecordListForm {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl RecordListForm {
    /// A form holding exactly one empty entry.
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::user_info())
    }

    pub fn with_policy(policy: &'static ValidationPolicy) -> Self {
        let form = Self {
            slots: vec![Slot::default()],
            policy,
        };
        tracing::debug!("Form initialized with one empty entry");
        form
    }

    pub fn policy(&self) -> &'static ValidationPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &RecordEntry> + '_ {
        self.slots.iter().map(|slot| &slot.entry)
    }

    pub fn values(&self) -> Vec<RecordEntry> {
        self.entries().cloned().collect()
    }

    /// Appends an empty entry and returns its index.
    pub fn add_entry(&mut self) -> usize {
        self.slots.push(Slot::default());
        let index = self.slots.len() - 1;
        tracing::debug!(index, len = self.slots.len(), "Entry added");
        index
    }

    /// Removes the entry at `index`; later entries shift down by one.
    pub fn remove_entry(&mut self, index: usize) -> Result<RecordEntry> {
        self.check_index(index)?;
        let removed = self.slots.remove(index).entry;
        tracing::debug!(index, len = self.slots.len(), "Entry removed");
        Ok(removed)
    }

    pub fn entry_at(&self, index: usize) -> Result<&RecordEntry> {
        self.slot(index).map(|slot| &slot.entry)
    }

    /// Write binding for one entry. Edits made through it mark fields touched.
    pub fn entry_at_mut(&mut self, index: usize) -> Result<EntryBinding<'_>> {
        self.check_index(index)?;
        Ok(EntryBinding {
            slot: &mut self.slots[index],
        })
    }

    pub fn set_field(&mut self, index: usize, field: Field, value: impl Into<String>) -> Result<()> {
        self.entry_at_mut(index)?.set(field, value);
        Ok(())
    }

    /// Marks a field as visited without changing its value.
    pub fn touch(&mut self, index: usize, field: Field) -> Result<()> {
        self.entry_at_mut(index)?.touch(field);
        Ok(())
    }

    pub fn field_errors(&self, index: usize, field: Field) -> Result<Vec<RuleViolation>> {
        let entry = self.entry_at(index)?;
        Ok(self.policy.validate_value(field, entry.get(field)))
    }

    pub fn entry_errors(&self, index: usize) -> Result<EntryErrors> {
        let entry = self.entry_at(index)?;
        Ok(self.policy.validate_entry(entry))
    }

    pub fn field_state(&self, index: usize, field: Field) -> Result<FieldState> {
        let slot = self.slot(index)?;
        if !slot.is_touched(field) {
            return Ok(FieldState::Pristine);
        }
        if self.policy.validate_value(field, slot.entry.get(field)).is_empty() {
            Ok(FieldState::TouchedValid)
        } else {
            Ok(FieldState::TouchedInvalid)
        }
    }

    pub fn is_entry_valid(&self, index: usize) -> Result<bool> {
        let entry = self.entry_at(index)?;
        Ok(self.policy.is_valid(entry))
    }

    pub fn is_valid(&self) -> bool {
        self.entries().all(|entry| self.policy.is_valid(entry))
    }

    /// Captures the current values in order, valid or not.
    pub fn submit(&self) -> Snapshot {
        let snapshot = Snapshot::new(self.values());
        match serde_json::to_string(&snapshot) {
            Ok(body) => tracing::info!(
                entries = snapshot.len(),
                valid = self.is_valid(),
                "Form submitted: {}",
                body
            ),
            Err(e) => tracing::warn!("Form submitted but snapshot could not be encoded: {}", e),
        }
        snapshot
    }

    /// Discards every entry and starts over with one empty entry.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.slots.push(Slot::default());
        tracing::debug!("Form reset");
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            tracing::warn!(index, len = self.slots.len(), "Entry index out of range");
            Err(FormError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
        }
    }

    fn slot(&self, index: usize) -> Result<&Slot> {
        self.check_index(index)?;
        Ok(&self.slots[index])
    }
}

/// Mutable view of one entry inside a [`RecordListForm`].
#[derive(Debug)]
pub struct EntryBinding<'a> {
    slot: &'a mut Slot,
}

impl EntryBinding<'_> {
    pub fn entry(&self) -> &RecordEntry {
        &self.slot.entry
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &mut Self {
        self.slot.entry.set(field, value);
        self.slot.touch(field);
        self
    }

    pub fn touch(&mut self, field: Field) -> &mut Self {
        self.slot.touch(field);
        self
    }
}
