//! Compact action references carried by buttons.

/// Follow-up action encoded into a button's callback data.
///
/// Indices are catalog positions at render time; they are not stable ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionRef {
    /// Show a quote from the work at this index
    PickWork(usize),
    /// Another quote from the work at this index
    Reroll(usize),
    /// Quote from a random work
    Random,
    /// Back to the work list
    Back,
    /// Start the add-work dialogue
    AddWork,
}

const PICK_PREFIX: &str = "fanfic:";
const REROLL_PREFIX: &str = "again:";
const RANDOM: &str = "random";
const BACK: &str = "back";
const ADD: &str = "addfanfic";

impl ActionRef {
    /// Callback data for this action.
    pub fn encode(&self) -> String {
        match self {
            Self::PickWork(i) => format!("{PICK_PREFIX}{i}"),
            Self::Reroll(i) => format!("{REROLL_PREFIX}{i}"),
            Self::Random => RANDOM.to_string(),
            Self::Back => BACK.to_string(),
            Self::AddWork => ADD.to_string(),
        }
    }

    /// Decode callback data. Unknown or malformed data yields `None`.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            RANDOM => Some(Self::Random),
            BACK => Some(Self::Back),
            ADD => Some(Self::AddWork),
            _ => {
                if let Some(index) = data.strip_prefix(PICK_PREFIX) {
                    index.parse().ok().map(Self::PickWork)
                } else if let Some(index) = data.strip_prefix(REROLL_PREFIX) {
                    index.parse().ok().map(Self::Reroll)
                } else {
                    None
                }
            }
        }
    }
}

impl std::fmt::Display for ActionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_matches_callback_format() {
        assert_eq!(ActionRef::PickWork(3).encode(), "fanfic:3");
        assert_eq!(ActionRef::Reroll(0).encode(), "again:0");
        assert_eq!(ActionRef::Random.encode(), "random");
        assert_eq!(ActionRef::Back.encode(), "back");
        assert_eq!(ActionRef::AddWork.encode(), "addfanfic");
    }

    #[test]
    fn test_parse_indexed() {
        assert_eq!(ActionRef::parse("fanfic:12"), Some(ActionRef::PickWork(12)));
        assert_eq!(ActionRef::parse("again:4"), Some(ActionRef::Reroll(4)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(ActionRef::parse("fanfic:"), None);
        assert_eq!(ActionRef::parse("fanfic:-1"), None);
        assert_eq!(ActionRef::parse("again:x"), None);
        assert_eq!(ActionRef::parse("Random"), None);
        assert_eq!(ActionRef::parse(""), None);
    }
}
