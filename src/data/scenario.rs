use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    Duplicate,
    Update,
    Boundary,
    SpecialChars,
    Performance,
    Mixed,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Duplicate,
        Scenario::Update,
        Scenario::Boundary,
        Scenario::SpecialChars,
        Scenario::Performance,
        Scenario::Mixed,
    ];

    /// Case-insensitive lookup; unknown keys yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|v| v.as_str().eq_ignore_ascii_case(key))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Scenario::Duplicate     => "duplicate",
            Scenario::Update        => "update",
            Scenario::Boundary      => "boundary",
            Scenario::SpecialChars  => "specialchars",
            Scenario::Performance   => "performance",
            Scenario::Mixed         => "mixed",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
