//! Person-to-chore rotation.
//!
//! Each week the people list is rotated left by the rotation index and chores are dealt
//! out to the rotated list in order, wrapping around when there are more chores than
//! people. After a reminder is posted the index advances by exactly one person.

use crate::server::model::chore::ChoreAssignment;

/// Assigns every chore to a person for the given rotation index.
///
/// `chores[i]` goes to `people[(i + rotation_index) % people.len()]`, so the result has
/// one assignment per chore in chore order. People without a chore this week are simply
/// absent from the result.
///
/// # Arguments
/// - `people` - People in rotation order
/// - `chores` - Chores in display order
/// - `rotation_index` - Current offset into `people`
///
/// # Returns
/// - `Vec<ChoreAssignment>` - One pairing per chore, empty when there are no people
pub fn assign(people: &[String], chores: &[String], rotation_index: usize) -> Vec<ChoreAssignment> {
    if people.is_empty() {
        return Vec::new();
    }

    chores
        .iter()
        .enumerate()
        .map(|(i, chore)| ChoreAssignment {
            person: people[(i + rotation_index) % people.len()].clone(),
            chore: chore.clone(),
        })
        .collect()
}

/// Rotation index to use after a reminder has been posted
pub fn next_index(rotation_index: usize, people_count: usize) -> usize {
    if people_count == 0 {
        return 0;
    }

    (rotation_index + 1) % people_count
}

/// Renders assignments as one `person → chore` line each, in chore order
pub fn render(assignments: &[ChoreAssignment]) -> String {
    assignments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
