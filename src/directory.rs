use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::models::Activity;
use crate::seed;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Activities keyed by exact, case-sensitive name.
///
/// Entries keep their insertion order so listings come out in seed order.
/// Emails are compared byte for byte: no trimming, no case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, Activity)>,
}

impl Directory {
    pub fn new(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    pub fn seeded() -> Self {
        Self::new(seed::activities())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, a)| (name.as_str(), a))
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.iter().find(|(n, _)| *n == name).map(|(_, a)| a)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Activity, DirectoryError> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
            .ok_or(DirectoryError::NotFound)
    }

    /// Append `email` to the activity's participants. Capacity is not checked.
    pub fn sign_up(&mut self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        let entry = self.get_mut(activity)?;
        if entry.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        entry.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&mut self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        let entry = self.get_mut(activity)?;
        let pos = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotSignedUp)?;
        entry.participants.remove(pos);
        Ok(())
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participants<'a>(dir: &'a Directory, name: &str) -> &'a [String] {
        &dir.get(name).unwrap().participants
    }

    #[test]
    fn test_sign_up_appends_in_order() {
        let mut dir = Directory::seeded();
        dir.sign_up("Basketball Team", "new@x.edu").unwrap();
        assert_eq!(
            participants(&dir, "Basketball Team"),
            ["james@mergington.edu", "marcus@mergington.edu", "new@x.edu"]
        );
    }

    #[test]
    fn test_sign_up_twice_keeps_one_copy() {
        let mut dir = Directory::seeded();
        dir.sign_up("Chess Club", "a@x.edu").unwrap();
        assert_eq!(
            dir.sign_up("Chess Club", "a@x.edu"),
            Err(DirectoryError::AlreadySignedUp)
        );
        let count = participants(&dir, "Chess Club")
            .iter()
            .filter(|p| *p == "a@x.edu")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_unknown_activity() {
        let mut dir = Directory::seeded();
        assert_eq!(dir.sign_up("Nonexistent Club", "a@x.edu"), Err(DirectoryError::NotFound));
        assert_eq!(dir.unregister("Nonexistent Club", "a@x.edu"), Err(DirectoryError::NotFound));
        // names are case-sensitive
        assert_eq!(dir.sign_up("tennis club", "a@x.edu"), Err(DirectoryError::NotFound));
    }

    #[test]
    fn test_emails_are_case_sensitive() {
        let mut dir = Directory::seeded();
        dir.sign_up("Tennis Club", "student@x.edu").unwrap();
        dir.sign_up("Tennis Club", "STUDENT@X.EDU").unwrap();
        assert_eq!(
            dir.unregister("Tennis Club", "Alex@mergington.edu"),
            Err(DirectoryError::NotSignedUp)
        );
    }

    #[test]
    fn test_unregister_only_touches_one_activity() {
        let mut dir = Directory::seeded();
        dir.sign_up("Art Studio", "james@mergington.edu").unwrap();
        dir.unregister("Basketball Team", "james@mergington.edu").unwrap();
        assert_eq!(participants(&dir, "Basketball Team"), ["marcus@mergington.edu"]);
        assert!(participants(&dir, "Art Studio").contains(&"james@mergington.edu".to_string()));
        assert_eq!(
            dir.unregister("Basketball Team", "james@mergington.edu"),
            Err(DirectoryError::NotSignedUp)
        );
    }

    #[test]
    fn test_capacity_is_not_enforced() {
        let mut dir = Directory::seeded();
        let max = dir.get("Chess Club").unwrap().max_participants;
        for i in 0..max {
            dir.sign_up("Chess Club", &format!("s{i}@x.edu")).unwrap();
        }
        assert!(participants(&dir, "Chess Club").len() as u32 > max);
        assert_eq!(dir.get("Chess Club").unwrap().spots_left(), 0);
    }

    #[test]
    fn test_serializes_as_object_in_seed_order() {
        let dir = Directory::seeded();
        let json = serde_json::to_string(&dir).unwrap();
        let tennis = json.find("\"Tennis Club\"").unwrap();
        let gym = json.find("\"Gym Class\"").unwrap();
        assert!(tennis < gym);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 9);
        assert_eq!(obj["Tennis Club"]["max_participants"], 16);
    }
}
