use serde::Serialize;

use crate::models::member::Member;

/// In-progress values for a row being edited. The inline inputs write here;
/// the record itself only changes on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Draft {
    pub fn from_member(member: &Member) -> Self {
        Draft {
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.clone(),
        }
    }

    pub fn apply_to(&self, member: &mut Member) {
        member.name.clone_from(&self.name);
        member.email.clone_from(&self.email);
        member.role.clone_from(&self.role);
    }
}

/// Per-row display mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RowMode {
    Viewing,
    Editing(Draft),
}

impl RowMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, RowMode::Editing(_))
    }
}
