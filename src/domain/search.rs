//! Shelter search and filter chips.
//!
//! Text search is a case-insensitive substring match against the shelter's
//! name or address. It is not tokenized or ranked, and whitespace and
//! diacritics are compared as-is. An empty query keeps every shelter.
//!
//! Both steps return a subsequence of the input: relative order is preserved
//! and the input is never modified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::{Shelter, SlotType, VolunteerSlot};

/// Whether `shelter` matches a free-text query.
pub fn matches_query(shelter: &Shelter, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contains_lowercase(shelter, &needle)
}

fn contains_lowercase(shelter: &Shelter, needle: &str) -> bool {
    shelter.name.to_lowercase().contains(needle) || shelter.address.to_lowercase().contains(needle)
}

/// Shelters whose name or address contains `query`, in input order.
pub fn filter_by_query<'a>(shelters: &'a [Shelter], query: &str) -> Vec<&'a Shelter> {
    if query.is_empty() {
        return shelters.iter().collect();
    }
    let needle = query.to_lowercase();
    shelters
        .iter()
        .filter(|s| contains_lowercase(s, &needle))
        .collect()
}

/// Filter chip shown above the shelter list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShelterFilter {
    #[default]
    All,
    /// Shelters advertising slots today.
    Today,
    Walk,
    Bath,
    Clean,
}

impl ShelterFilter {
    pub const ALL: [ShelterFilter; 5] = [
        ShelterFilter::All,
        ShelterFilter::Today,
        ShelterFilter::Walk,
        ShelterFilter::Bath,
        ShelterFilter::Clean,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "전체",
            Self::Today => "오늘 가능",
            Self::Walk => "산책",
            Self::Bath => "목욕",
            Self::Clean => "청소",
        }
    }

    fn slot_type(self) -> Option<SlotType> {
        match self {
            Self::Walk => Some(SlotType::Walk),
            Self::Bath => Some(SlotType::Bath),
            Self::Clean => Some(SlotType::Clean),
            Self::All | Self::Today => None,
        }
    }

    /// Whether `shelter` passes this chip. Activity chips match shelters that
    /// offer at least one slot of that type.
    pub fn matches(self, shelter: &Shelter, slots: &[VolunteerSlot]) -> bool {
        match self {
            Self::All => true,
            Self::Today => shelter.has_slots_today(),
            _ => {
                let wanted = self.slot_type();
                slots
                    .iter()
                    .any(|slot| slot.shelter_id == shelter.id && Some(slot.slot_type) == wanted)
            }
        }
    }

    /// Keeps the shelters passing this chip, in input order.
    pub fn apply<'a>(
        self,
        shelters: impl IntoIterator<Item = &'a Shelter>,
        slots: &[VolunteerSlot],
    ) -> Vec<&'a Shelter> {
        shelters
            .into_iter()
            .filter(|s| self.matches(s, slots))
            .collect()
    }
}

impl fmt::Display for ShelterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Walk => "walk",
            Self::Bath => "bath",
            Self::Clean => "clean",
        };
        f.write_str(id)
    }
}

impl FromStr for ShelterFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.to_string() == s)
            .ok_or_else(|| format!("unknown filter '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn seed_shelters() -> Vec<Shelter> {
        vec![
            Shelter::new("1", "Gangnam Shelter", "Seoul Gangnam-gu"),
            Shelter::new("2", "Mapo Shelter", "Seoul Mapo-gu"),
        ]
    }

    fn slot(id: &str, shelter_id: &str, slot_type: SlotType) -> VolunteerSlot {
        VolunteerSlot {
            id: id.to_string(),
            shelter_id: shelter_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            capacity: 3,
            current_applicants: 0,
            slot_type,
            description: String::new(),
        }
    }

    fn ids(shelters: &[&Shelter]) -> Vec<String> {
        shelters.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let shelters = seed_shelters();
        let result = filter_by_query(&shelters, "");
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_query_matches_case_insensitively() {
        let shelters = seed_shelters();
        for q in ["mapo", "MAPO", "Mapo", "mApO"] {
            let result = filter_by_query(&shelters, q);
            assert_eq!(ids(&result), vec!["2"], "query {q}");
        }
    }

    #[test]
    fn test_query_matches_address() {
        let shelters = seed_shelters();
        let result = filter_by_query(&shelters, "gangnam-gu");
        assert_eq!(ids(&result), vec!["1"]);

        let result = filter_by_query(&shelters, "seoul");
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let shelters = seed_shelters();
        assert!(filter_by_query(&shelters, "busan").is_empty());
    }

    #[test]
    fn test_whitespace_is_not_normalized() {
        let shelters = seed_shelters();
        assert!(filter_by_query(&shelters, "mapo  shelter").is_empty());
        assert_eq!(ids(&filter_by_query(&shelters, "o s")), vec!["2"]);
    }

    #[test]
    fn test_korean_substring() {
        let shelters = vec![
            Shelter::new("1", "강남 행복 보호소", "서울 강남구 역삼동"),
            Shelter::new("2", "마포 사랑 쉼터", "서울 마포구 망원동"),
        ];
        assert_eq!(ids(&filter_by_query(&shelters, "마포")), vec!["2"]);
        assert_eq!(ids(&filter_by_query(&shelters, "서울")), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_partition_property() {
        let shelters = vec![
            Shelter::new("1", "Alpha", "North"),
            Shelter::new("2", "Beta", "South"),
            Shelter::new("3", "Gamma", "Northeast"),
            Shelter::new("4", "Delta", "West"),
        ];
        for q in ["", "north", "TA", "z", "a"] {
            let kept = filter_by_query(&shelters, q);
            for s in &shelters {
                let included = kept.iter().any(|k| k.id == s.id);
                assert_eq!(included, matches_query(s, q), "query {q} shelter {}", s.id);
            }
            let positions: Vec<usize> = kept
                .iter()
                .map(|k| shelters.iter().position(|s| s.id == k.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_today_chip() {
        let mut shelters = seed_shelters();
        shelters[1].today_slots = Some(2);

        let result = ShelterFilter::Today.apply(&shelters, &[]);
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_activity_chip_uses_slots() {
        let shelters = seed_shelters();
        let slots = vec![
            slot("s1", "1", SlotType::Bath),
            slot("s2", "2", SlotType::Walk),
            slot("s3", "1", SlotType::Walk),
        ];

        assert_eq!(
            ids(&ShelterFilter::Walk.apply(&shelters, &slots)),
            vec!["1", "2"]
        );
        assert_eq!(ids(&ShelterFilter::Bath.apply(&shelters, &slots)), vec!["1"]);
        assert!(ShelterFilter::Clean.apply(&shelters, &slots).is_empty());
        assert_eq!(ShelterFilter::All.apply(&shelters, &slots).len(), 2);
    }

    #[test]
    fn test_filter_parse_round_trip() {
        for f in ShelterFilter::ALL {
            assert_eq!(f.to_string().parse::<ShelterFilter>().unwrap(), f);
        }
        assert!("weekend".parse::<ShelterFilter>().is_err());
    }
}
