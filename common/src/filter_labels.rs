//! Fixed label sets for each filter dimension.
//!
//! Every filter value is an enum variant, so a filter field can only ever hold
//! a value from its own set. [`FilterLabel::from_label`] is the only way in from
//! free text and it rejects anything outside the set.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A value drawn from a small, fixed, ordered label set.
pub trait FilterLabel: Sized + Copy + Ord + 'static {
    /// Every value of the set, in display order.
    const ALL: &'static [Self];

    /// Text shown next to the control.
    fn label(&self) -> &'static str;

    /// Exact, case-sensitive lookup by display label; `None` for anything outside the set.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Destination {
    Spain,
    Italy,
    Greece,
    Turkey,
    Croatia,
}

impl FilterLabel for Destination {
    const ALL: &'static [Self] = &[Self::Spain, Self::Italy, Self::Greece, Self::Turkey, Self::Croatia];

    fn label(&self) -> &'static str {
        match self {
            Self::Spain => "Spain",
            Self::Italy => "Italy",
            Self::Greece => "Greece",
            Self::Turkey => "Turkey",
            Self::Croatia => "Croatia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StarRating {
    #[serde(rename = "5 stars")]
    FiveStars,
    #[serde(rename = "4 stars")]
    FourStars,
    #[serde(rename = "3 stars")]
    ThreeStars,
    #[serde(rename = "2 stars")]
    TwoStars,
    #[serde(rename = "1 star")]
    OneStar,
}

impl FilterLabel for StarRating {
    const ALL: &'static [Self] = &[Self::FiveStars, Self::FourStars, Self::ThreeStars, Self::TwoStars, Self::OneStar];

    fn label(&self) -> &'static str {
        match self {
            Self::FiveStars => "5 stars",
            Self::FourStars => "4 stars",
            Self::ThreeStars => "3 stars",
            Self::TwoStars => "2 stars",
            Self::OneStar => "1 star",
        }
    }
}

impl StarRating {
    pub fn stars(&self) -> u8 {
        match self {
            Self::FiveStars => 5,
            Self::FourStars => 4,
            Self::ThreeStars => 3,
            Self::TwoStars => 2,
            Self::OneStar => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Amenity {
    Restaurant,
    #[serde(rename = "Hotel bar")]
    HotelBar,
    #[serde(rename = "Free breakfast")]
    FreeBreakfast,
    #[serde(rename = "Room service")]
    RoomService,
    #[serde(rename = "Fitness center")]
    FitnessCenter,
}

impl FilterLabel for Amenity {
    const ALL: &'static [Self] = &[
        Self::Restaurant,
        Self::HotelBar,
        Self::FreeBreakfast,
        Self::RoomService,
        Self::FitnessCenter,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::HotelBar => "Hotel bar",
            Self::FreeBreakfast => "Free breakfast",
            Self::RoomService => "Room service",
            Self::FitnessCenter => "Fitness center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccommodationType {
    Hotel,
    Apartment,
    Resort,
    Villa,
    #[serde(rename = "Bed & Breakfast")]
    BedAndBreakfast,
}

impl FilterLabel for AccommodationType {
    const ALL: &'static [Self] = &[Self::Hotel, Self::Apartment, Self::Resort, Self::Villa, Self::BedAndBreakfast];

    fn label(&self) -> &'static str {
        match self {
            Self::Hotel => "Hotel",
            Self::Apartment => "Apartment",
            Self::Resort => "Resort",
            Self::Villa => "Villa",
            Self::BedAndBreakfast => "Bed & Breakfast",
        }
    }
}

macro_rules! display_as_label {
    ($($t:ty),*) => {
        $(impl Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_as_label!(Destination, StarRating, Amenity, AccommodationType);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_sets_keep_display_order() {
        let destinations = Destination::ALL.iter().map(|d| d.label()).collect::<Vec<_>>();
        assert_eq!(destinations, vec!["Spain", "Italy", "Greece", "Turkey", "Croatia"]);

        let ratings = StarRating::ALL.iter().map(|r| r.stars()).collect::<Vec<_>>();
        assert_eq!(ratings, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn from_label_rejects_free_text() {
        assert_eq!(Destination::from_label("Greece"), Some(Destination::Greece));
        assert_eq!(Destination::from_label("Atlantis"), None);
        assert_eq!(Destination::from_label("greece"), None);
        assert_eq!(AccommodationType::from_label("Bed & Breakfast"), Some(AccommodationType::BedAndBreakfast));
        assert_eq!(Amenity::from_label(""), None);
    }

    #[test]
    fn serialized_form_is_the_display_label() {
        assert_eq!(serde_json::to_string(&Amenity::RoomService).unwrap(), "\"Room service\"");
        assert_eq!(serde_json::to_string(&StarRating::OneStar).unwrap(), "\"1 star\"");
        assert!(serde_json::from_str::<Amenity>("\"Sauna\"").is_err());
        assert_eq!(StarRating::FourStars.to_string(), "4 stars");
    }
}
