use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Airport service area a piece of feedback concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CheckIn,
    Security,
    Immigration,
    Baggage,
    Facilities,
    Dining,
    Shopping,
    Cleanliness,
    StaffService,
    OverallExperience,
}

/// (code, label) per category, indexed by discriminant.
const CATEGORY_TABLE: [(&str, &str); 10] = [
    ("check_in", "Check-in Process"),
    ("security", "Security Screening"),
    ("immigration", "Immigration & Customs"),
    ("baggage", "Baggage Handling"),
    ("facilities", "Airport Facilities"),
    ("dining", "Dining & Food Service"),
    ("shopping", "Shopping Experience"),
    ("cleanliness", "Cleanliness"),
    ("staff_service", "Staff Service"),
    ("overall_experience", "Overall Experience"),
];

impl Category {
    pub const ALL: [Category; 10] = [
        Category::CheckIn,
        Category::Security,
        Category::Immigration,
        Category::Baggage,
        Category::Facilities,
        Category::Dining,
        Category::Shopping,
        Category::Cleanliness,
        Category::StaffService,
        Category::OverallExperience,
    ];

    /// Stable snake_case code, as stored and submitted.
    pub fn code(self) -> &'static str {
        CATEGORY_TABLE[self as usize].0
    }

    /// Human-readable label for forms and the dashboard.
    pub fn label(self) -> &'static str {
        CATEGORY_TABLE[self as usize].1
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown feedback category '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_variant_order() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::StaffService.code(), "staff_service");
        assert_eq!(Category::Immigration.label(), "Immigration & Customs");
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(Category::from_code("lounge"), None);
        assert_eq!(Category::from_code("Check_In"), None);
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_code() {
        let json = serde_json::to_string(&Category::OverallExperience).unwrap();
        assert_eq!(json, "\"overall_experience\"");
        let back: Category = serde_json::from_str("\"check_in\"").unwrap();
        assert_eq!(back, Category::CheckIn);
    }
}
