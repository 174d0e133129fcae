use crate::models::Activity;

fn activity(description: &str, schedule: &str, max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The activities every process starts with, in display order.
pub fn activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Tennis Club".to_string(),
            activity(
                "Learn tennis skills and compete in matches",
                "Wednesdays and Saturdays, 4:00 PM - 5:30 PM",
                16,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            activity(
                "Competitive basketball training and games",
                "Mondays and Thursdays, 4:00 PM - 5:30 PM",
                15,
                &["james@mergington.edu", "marcus@mergington.edu"],
            ),
        ),
        (
            "Art Studio".to_string(),
            activity(
                "Painting, drawing, and sculpture techniques",
                "Tuesdays and Fridays, 3:30 PM - 5:00 PM",
                18,
                &["isabella@mergington.edu"],
            ),
        ),
        (
            "Music Ensemble".to_string(),
            activity(
                "Learn instruments and perform ensemble pieces",
                "Wednesdays, 3:30 PM - 4:30 PM",
                25,
                &["noah@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop argumentation and public speaking skills",
                "Mondays and Wednesdays, 3:30 PM - 4:30 PM",
                20,
                &["lucas@mergington.edu"],
            ),
        ),
        (
            "Science Club".to_string(),
            activity(
                "Explore experiments and scientific discovery",
                "Thursdays, 3:30 PM - 5:00 PM",
                22,
                &["maya@mergington.edu", "ethan@mergington.edu"],
            ),
        ),
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_nine_activities() {
        let names: Vec<String> = activities().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "Tennis Club",
                "Basketball Team",
                "Art Studio",
                "Music Ensemble",
                "Debate Team",
                "Science Club",
                "Chess Club",
                "Programming Class",
                "Gym Class",
            ]
        );
    }

    #[test]
    fn test_seed_participants_are_unique_and_within_capacity() {
        for (name, a) in activities() {
            let mut sorted = a.participants.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), a.participants.len(), "duplicates in {name}");
            assert!(a.participants.len() as u32 <= a.max_participants);
        }
    }
}
