use std::fmt::{Display, Formatter};

/// Identifies one point selection. Ids increase monotonically, a higher id is a more recent selection.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionId(u64);

impl SelectionId {
    pub fn new(id: u64) -> Self {
        SelectionId(id)
    }
}

impl Display for SelectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
