//! Administrative divisions and districts of Bangladesh.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The eight administrative divisions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    Dhaka,
    Chittagong,
    Rajshahi,
    Khulna,
    Barisal,
    Sylhet,
    Rangpur,
    Mymensingh,
}

const DHAKA: &[&str] = &[
    "Dhaka",
    "Gazipur",
    "Narayanganj",
    "Tangail",
    "Kishoreganj",
    "Manikganj",
    "Munshiganj",
    "Narsingdi",
    "Rajbari",
    "Gopalganj",
    "Faridpur",
    "Madaripur",
    "Shariatpur",
];

const CHITTAGONG: &[&str] = &[
    "Chittagong",
    "Cox's Bazar",
    "Rangamati",
    "Bandarban",
    "Khagrachari",
    "Feni",
    "Lakshmipur",
    "Comilla",
    "Noakhali",
    "Brahmanbaria",
    "Chandpur",
];

const RAJSHAHI: &[&str] = &[
    "Rajshahi",
    "Natore",
    "Naogaon",
    "Chapainawabganj",
    "Pabna",
    "Sirajganj",
    "Bogra",
    "Joypurhat",
];

const KHULNA: &[&str] = &[
    "Khulna",
    "Bagerhat",
    "Satkhira",
    "Jessore",
    "Jhenaidah",
    "Magura",
    "Narail",
    "Kushtia",
    "Chuadanga",
    "Meherpur",
];

const BARISAL: &[&str] = &[
    "Barisal",
    "Patuakhali",
    "Barguna",
    "Bhola",
    "Pirojpur",
    "Jhalokathi",
];

const SYLHET: &[&str] = &["Sylhet", "Moulvibazar", "Habiganj", "Sunamganj"];

const RANGPUR: &[&str] = &[
    "Rangpur",
    "Dinajpur",
    "Gaibandha",
    "Kurigram",
    "Lalmonirhat",
    "Nilphamari",
    "Panchagarh",
    "Thakurgaon",
];

const MYMENSINGH: &[&str] = &["Mymensingh", "Jamalpur", "Netrokona", "Sherpur"];

impl Division {
    pub const ALL: [Division; 8] = [
        Division::Dhaka,
        Division::Chittagong,
        Division::Rajshahi,
        Division::Khulna,
        Division::Barisal,
        Division::Sylhet,
        Division::Rangpur,
        Division::Mymensingh,
    ];

    /// Lowercase form key (e.g., "dhaka").
    pub fn key(&self) -> &'static str {
        match self {
            Division::Dhaka => "dhaka",
            Division::Chittagong => "chittagong",
            Division::Rajshahi => "rajshahi",
            Division::Khulna => "khulna",
            Division::Barisal => "barisal",
            Division::Sylhet => "sylhet",
            Division::Rangpur => "rangpur",
            Division::Mymensingh => "mymensingh",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Division::Dhaka => "Dhaka",
            Division::Chittagong => "Chittagong",
            Division::Rajshahi => "Rajshahi",
            Division::Khulna => "Khulna",
            Division::Barisal => "Barisal",
            Division::Sylhet => "Sylhet",
            Division::Rangpur => "Rangpur",
            Division::Mymensingh => "Mymensingh",
        }
    }

    /// District names in form order.
    pub fn districts(&self) -> &'static [&'static str] {
        match self {
            Division::Dhaka => DHAKA,
            Division::Chittagong => CHITTAGONG,
            Division::Rajshahi => RAJSHAHI,
            Division::Khulna => KHULNA,
            Division::Barisal => BARISAL,
            Division::Sylhet => SYLHET,
            Division::Rangpur => RANGPUR,
            Division::Mymensingh => MYMENSINGH,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Division::ALL
            .into_iter()
            .find(|d| d.key() == key)
            .ok_or_else(|| format!("Unknown division: {}", s))
    }
}

/// A selectable district entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistrictOption {
    /// Form value (e.g., "cox's_bazar")
    pub value: String,
    /// Display name (e.g., "Cox's Bazar")
    pub label: String,
}

/// Form value for a district name: lowercase, whitespace runs become `_`.
pub fn district_value(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// District options for a division, in form order.
pub fn district_options(division: Division) -> Vec<DistrictOption> {
    division
        .districts()
        .iter()
        .map(|name| DistrictOption {
            value: district_value(name),
            label: name.to_string(),
        })
        .collect()
}

/// Resolve a district form value to its display name within a division.
pub fn find_district(division: Division, value: &str) -> Option<&'static str> {
    let value = value.trim().to_lowercase();
    division
        .districts()
        .iter()
        .copied()
        .find(|name| district_value(name) == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_parsing() {
        assert_eq!("dhaka".parse::<Division>().unwrap(), Division::Dhaka);
        assert_eq!(" Sylhet ".parse::<Division>().unwrap(), Division::Sylhet);
        assert!("atlantis".parse::<Division>().is_err());
    }

    #[test]
    fn test_district_counts() {
        let total: usize = Division::ALL.iter().map(|d| d.districts().len()).sum();
        assert_eq!(total, 64);
        assert_eq!(Division::Dhaka.districts().len(), 13);
        assert_eq!(Division::Mymensingh.districts().len(), 4);
    }

    #[test]
    fn test_district_value_slug() {
        assert_eq!(district_value("Cox's Bazar"), "cox's_bazar");
        assert_eq!(district_value("Dhaka"), "dhaka");
    }

    #[test]
    fn test_district_options() {
        let options = district_options(Division::Sylhet);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].value, "sylhet");
        assert_eq!(options[1].label, "Moulvibazar");
    }

    #[test]
    fn test_find_district() {
        assert_eq!(find_district(Division::Chittagong, "cox's_bazar"), Some("Cox's Bazar"));
        assert_eq!(find_district(Division::Dhaka, "cox's_bazar"), None);
    }
}
