// src/common/reading.rs

use super::error::DecodeError;
use super::types::{Field, Reading, StatusCode};

/// The set of readings decoded from one stream line (or `A` reply).
///
/// Each recognized field occupies at most one slot. Values can only enter the
/// set through [`Reading::parse`], so a field always holds a value of its
/// declared kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingSet {
    slots: [Option<Reading>; Field::ALL.len()],
}

impl ReadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text` as the value of `field` and stores it, replacing any
    /// earlier value for the same field.
    pub(crate) fn insert_parsed(&mut self, field: Field, text: &str) -> Result<(), DecodeError> {
        let reading = Reading::parse(field, text)?;
        self.slots[field.index()] = Some(reading);
        Ok(())
    }

    pub fn get(&self, field: Field) -> Option<&Reading> {
        self.slots[field.index()].as_ref()
    }

    /// Removes and returns the value of `field`.
    pub fn take(&mut self, field: Field) -> Option<Reading> {
        self.slots[field.index()].take()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.slots[field.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates over present fields in tag order `O`, `%`, `T`, `P`, `e`.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &Reading)> + '_ {
        Field::ALL
            .iter()
            .filter_map(move |field| self.get(*field).map(|reading| (*field, reading)))
    }

    pub fn number(&self, field: Field) -> Option<f32> {
        self.get(field).and_then(Reading::as_number)
    }

    pub fn ppo2(&self) -> Option<f32> {
        self.number(Field::PartialPressure)
    }

    pub fn o2_percent(&self) -> Option<f32> {
        self.number(Field::Percent)
    }

    pub fn temperature(&self) -> Option<f32> {
        self.number(Field::Temperature)
    }

    pub fn pressure(&self) -> Option<f32> {
        self.number(Field::Pressure)
    }

    pub fn sensor_status(&self) -> Option<&StatusCode> {
        match self.get(Field::Status) {
            Some(Reading::Text(status)) => Some(status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = ReadingSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
        assert_eq!(set.ppo2(), None);
        assert_eq!(set.sensor_status(), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut set = ReadingSet::new();
        set.insert_parsed(Field::Temperature, "23.5").unwrap();
        set.insert_parsed(Field::Status, "0000").unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains(Field::Temperature));
        assert!(!set.contains(Field::Pressure));
        assert_eq!(set.temperature(), Some(23.5));
        assert_eq!(set.sensor_status().map(|s| s.as_str()), Some("0000"));
        // A text field never answers as a number
        assert_eq!(set.number(Field::Status), None);
    }

    #[test]
    fn test_insert_rejects_mismatched_kind() {
        let mut set = ReadingSet::new();
        assert_eq!(
            set.insert_parsed(Field::Pressure, "high"),
            Err(DecodeError::InvalidNumber)
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_duplicate_field_last_wins() {
        let mut set = ReadingSet::new();
        set.insert_parsed(Field::Percent, "20.9").unwrap();
        set.insert_parsed(Field::Percent, "21.0").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.o2_percent(), Some(21.0));
    }

    #[test]
    fn test_iter_order_and_take() {
        let mut set = ReadingSet::new();
        set.insert_parsed(Field::Status, "0").unwrap();
        set.insert_parsed(Field::PartialPressure, "0.21").unwrap();

        let fields: Vec<Field> = set.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::PartialPressure, Field::Status]);

        assert_eq!(set.take(Field::PartialPressure), Some(Reading::Number(0.21)));
        assert_eq!(set.take(Field::PartialPressure), None);
        assert_eq!(set.len(), 1);
    }
}
