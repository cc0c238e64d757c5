//! Rank model.
//!
//! This module defines the closed vocabulary of military ranks accepted by
//! the engine. Free-text rank labels from scanned documents are normalized
//! by upstream collaborators; the engine itself only works with these
//! variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A military rank in the statutory pay scale.
///
/// The order of variants runs from the top of the officer scale down to the
/// academy ranks. Serialized codes use snake_case (e.g. `"lieutenant_colonel"`,
/// `"cadet_year1"`); labels not in this vocabulary are rejected at the
/// request boundary rather than fuzzily matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Colonel, the reference rank of the pay scale.
    Colonel,
    /// Lieutenant-Colonel.
    LieutenantColonel,
    /// Major.
    Major,
    /// Captain.
    Captain,
    /// 1st Lieutenant.
    FirstLieutenant,
    /// 2nd Lieutenant.
    SecondLieutenant,
    /// Aspirant (officer candidate, pre-commission).
    Aspirant,
    /// Subofficer (senior warrant rank).
    Subofficer,
    /// 1st Sergeant.
    FirstSergeant,
    /// 2nd Sergeant.
    SecondSergeant,
    /// 3rd Sergeant.
    ThirdSergeant,
    /// Corporal.
    Corporal,
    /// Private.
    Private,
    /// Officer-school cadet, first year.
    CadetYear1,
    /// Officer-school cadet, second year.
    CadetYear2,
    /// Officer-school cadet, third year.
    CadetYear3,
}

impl Rank {
    /// Returns true for the academy ranks (cadets and aspirants), which
    /// draw a fixed stipend factor instead of accruing trienniums.
    pub fn is_academy(&self) -> bool {
        matches!(
            self,
            Rank::Aspirant | Rank::CadetYear1 | Rank::CadetYear2 | Rank::CadetYear3
        )
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rank::Colonel => "Colonel",
            Rank::LieutenantColonel => "Lieutenant-Colonel",
            Rank::Major => "Major",
            Rank::Captain => "Captain",
            Rank::FirstLieutenant => "1st Lieutenant",
            Rank::SecondLieutenant => "2nd Lieutenant",
            Rank::Aspirant => "Aspirant",
            Rank::Subofficer => "Subofficer",
            Rank::FirstSergeant => "1st Sergeant",
            Rank::SecondSergeant => "2nd Sergeant",
            Rank::ThirdSergeant => "3rd Sergeant",
            Rank::Corporal => "Corporal",
            Rank::Private => "Private",
            Rank::CadetYear1 => "Cadet (Year 1)",
            Rank::CadetYear2 => "Cadet (Year 2)",
            Rank::CadetYear3 => "Cadet (Year 3)",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_rank_codes() {
        assert_eq!(serde_json::to_string(&Rank::Colonel).unwrap(), "\"colonel\"");
        assert_eq!(
            serde_json::to_string(&Rank::LieutenantColonel).unwrap(),
            "\"lieutenant_colonel\""
        );
        assert_eq!(
            serde_json::to_string(&Rank::FirstSergeant).unwrap(),
            "\"first_sergeant\""
        );
        assert_eq!(
            serde_json::to_string(&Rank::CadetYear3).unwrap(),
            "\"cadet_year3\""
        );
    }

    #[test]
    fn test_deserialize_rank_codes() {
        let rank: Rank = serde_json::from_str("\"private\"").unwrap();
        assert_eq!(rank, Rank::Private);
        let rank: Rank = serde_json::from_str("\"second_lieutenant\"").unwrap();
        assert_eq!(rank, Rank::SecondLieutenant);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let result: Result<Rank, _> = serde_json::from_str("\"field_marshal\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Rank::LieutenantColonel.to_string(), "Lieutenant-Colonel");
        assert_eq!(Rank::FirstLieutenant.to_string(), "1st Lieutenant");
        assert_eq!(Rank::ThirdSergeant.to_string(), "3rd Sergeant");
        assert_eq!(Rank::CadetYear2.to_string(), "Cadet (Year 2)");
    }

    #[test]
    fn test_is_academy() {
        assert!(Rank::Aspirant.is_academy());
        assert!(Rank::CadetYear1.is_academy());
        assert!(Rank::CadetYear3.is_academy());
        assert!(!Rank::Private.is_academy());
        assert!(!Rank::Colonel.is_academy());
    }
}
