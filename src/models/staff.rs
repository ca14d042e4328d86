//! Staff members and roster membership.

use serde::{Deserialize, Serialize};

/// A staff member on the duty roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the member takes part in the on-call rotation.
    #[serde(default)]
    pub on_duty: bool,
    /// Position in the rotation; lower goes first.
    #[serde(default)]
    pub rotation_order: u32,
}

/// The full staff list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// All staff members, on duty or not.
    pub staff: Vec<StaffMember>,
}

impl Roster {
    /// Returns the ids of on-duty staff in rotation order.
    ///
    /// Members sharing a rotation position are ordered by id so the result
    /// never depends on file order.
    ///
    /// # Example
    ///
    /// ```
    /// use hakedis_engine::models::{Roster, StaffMember};
    ///
    /// let member = |id: &str, on_duty, order| StaffMember {
    ///     id: id.to_string(),
    ///     name: id.to_uppercase(),
    ///     on_duty,
    ///     rotation_order: order,
    /// };
    /// let roster = Roster {
    ///     staff: vec![member("c", true, 1), member("a", true, 2), member("b", false, 0)],
    /// };
    /// assert_eq!(roster.on_duty_in_rotation_order(), vec!["c", "a"]);
    /// ```
    pub fn on_duty_in_rotation_order(&self) -> Vec<String> {
        let mut on_duty: Vec<&StaffMember> = self.staff.iter().filter(|m| m.on_duty).collect();
        on_duty.sort_by(|a, b| {
            a.rotation_order
                .cmp(&b.rotation_order)
                .then_with(|| a.id.cmp(&b.id))
        });
        on_duty.into_iter().map(|m| m.id.clone()).collect()
    }

    /// Looks up a staff member by id.
    pub fn member(&self, id: &str) -> Option<&StaffMember> {
        self.staff.iter().find(|m| m.id == id)
    }
}
