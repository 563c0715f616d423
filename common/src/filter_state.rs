//! Filter state for the tour listing pages and the reducer that mutates it.
//!
//! The listing page owns one [`FilterState`] per page view. Controls never
//! write to it directly; they dispatch a [`FilterCommand`] and the owner runs
//! it through [`FilterState::apply`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::filter_labels::{AccommodationType, Amenity, Destination, FilterLabel, StarRating};

pub const PRICE_MIN: u32 = 0;
pub const PRICE_MAX: u32 = 1000;

/// Ordered price bounds, always inside `[PRICE_MIN, PRICE_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct PriceRange {
    low: u32,
    high: u32,
}

impl PriceRange {
    pub const FULL: PriceRange = PriceRange { low: PRICE_MIN, high: PRICE_MAX };

    /// Clamps both ends into bounds and swaps them if they arrive reversed.
    pub fn new(a: u32, b: u32) -> Self {
        let a = a.clamp(PRICE_MIN, PRICE_MAX);
        let b = b.clamp(PRICE_MIN, PRICE_MAX);
        Self { low: a.min(b), high: a.max(b) }
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<(u32, u32)> for PriceRange {
    fn from((low, high): (u32, u32)) -> Self {
        Self::new(low, high)
    }
}

impl From<PriceRange> for (u32, u32) {
    fn from(range: PriceRange) -> Self {
        (range.low, range.high)
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${} - ${}", self.low, self.high)
    }
}

/// Everything a user can do to the filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCommand {
    SelectDestination(Destination),
    /// Exclusive, like destination, even though the control looks like a checkbox list.
    SelectStarRating(StarRating),
    ToggleAmenity(Amenity),
    SelectAccommodationType(AccommodationType),
    /// Raw slider values; the reducer clamps and orders them.
    SetPriceRange(u32, u32),
    ClearAll,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub destination: Option<Destination>,
    pub star_rating: Option<StarRating>,
    pub amenities: BTreeSet<Amenity>,
    pub accommodation_type: Option<AccommodationType>,
    pub price_range: PriceRange,
}

impl FilterState {
    pub fn apply(mut self, command: FilterCommand) -> Self {
        match command {
            FilterCommand::SelectDestination(destination) => self.destination = Some(destination),
            FilterCommand::SelectStarRating(rating) => self.star_rating = Some(rating),
            FilterCommand::ToggleAmenity(amenity) => {
                if !self.amenities.remove(&amenity) {
                    self.amenities.insert(amenity);
                }
            }
            FilterCommand::SelectAccommodationType(kind) => self.accommodation_type = Some(kind),
            FilterCommand::SetPriceRange(low, high) => self.price_range = PriceRange::new(low, high),
            FilterCommand::ClearAll => self = Self::default(),
        }
        self
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    /// Number of dimensions the user has narrowed, amenities counted one by one.
    pub fn active_filter_count(&self) -> usize {
        self.destination.is_some() as usize
            + self.star_rating.is_some() as usize
            + self.accommodation_type.is_some() as usize
            + self.amenities.len()
            + !self.price_range.is_full() as usize
    }

    /// Short labels for the applied-filters strip, in sidebar order.
    pub fn applied_filter_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if let Some(destination) = self.destination {
            labels.push(destination.label().to_string());
        }
        if !self.price_range.is_full() {
            labels.push(self.price_range.to_string());
        }
        if let Some(rating) = self.star_rating {
            labels.push(rating.label().to_string());
        }
        labels.extend(self.amenities.iter().map(|a| a.label().to_string()));
        if let Some(kind) = self.accommodation_type {
            labels.push(kind.label().to_string());
        }
        labels
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(commands: impl IntoIterator<Item = FilterCommand>) -> FilterState {
        commands.into_iter().fold(FilterState::default(), FilterState::apply)
    }

    #[test]
    fn defaults_select_nothing_and_span_full_price_range() {
        let state = FilterState::default();
        assert_eq!(state.destination, None);
        assert_eq!(state.star_rating, None);
        assert_eq!(state.accommodation_type, None);
        assert!(state.amenities.is_empty());
        assert_eq!((state.price_range.low(), state.price_range.high()), (0, 1000));
        assert_eq!(state.active_filter_count(), 0);
        assert!(state.is_cleared());
    }

    #[test]
    fn later_destination_replaces_earlier() {
        let state = run([
            FilterCommand::SelectDestination(Destination::Italy),
            FilterCommand::SelectDestination(Destination::Greece),
        ]);
        assert_eq!(state.destination, Some(Destination::Greece));
    }

    #[test]
    fn destination_is_always_the_last_selection() {
        for first in Destination::ALL {
            for second in Destination::ALL {
                for last in Destination::ALL {
                    let state = run([*first, *second, *last].map(FilterCommand::SelectDestination));
                    assert_eq!(state.destination, Some(*last));
                }
            }
        }
    }

    #[test]
    fn star_rating_is_exclusive() {
        let state = run([
            FilterCommand::SelectStarRating(StarRating::FiveStars),
            FilterCommand::SelectStarRating(StarRating::ThreeStars),
        ]);
        assert_eq!(state.star_rating, Some(StarRating::ThreeStars));
    }

    #[test]
    fn selecting_the_current_rating_keeps_it_selected() {
        let state = run([
            FilterCommand::SelectStarRating(StarRating::FourStars),
            FilterCommand::SelectStarRating(StarRating::FourStars),
        ]);
        assert_eq!(state.star_rating, Some(StarRating::FourStars));
    }

    #[test]
    fn accommodation_type_is_exclusive() {
        let state = run([
            FilterCommand::SelectAccommodationType(AccommodationType::Villa),
            FilterCommand::SelectAccommodationType(AccommodationType::BedAndBreakfast),
        ]);
        assert_eq!(state.accommodation_type, Some(AccommodationType::BedAndBreakfast));
    }

    #[test]
    fn amenity_toggles_on_and_off() {
        let state = run([
            FilterCommand::ToggleAmenity(Amenity::RoomService),
            FilterCommand::ToggleAmenity(Amenity::FitnessCenter),
            FilterCommand::ToggleAmenity(Amenity::RoomService),
        ]);
        assert_eq!(state.amenities, BTreeSet::from([Amenity::FitnessCenter]));
    }

    #[test]
    fn amenity_toggles_match_parity_of_occurrences() {
        let sequence = [
            Amenity::Restaurant,
            Amenity::HotelBar,
            Amenity::Restaurant,
            Amenity::FreeBreakfast,
            Amenity::HotelBar,
            Amenity::HotelBar,
            Amenity::FitnessCenter,
        ];
        for len in 0..=sequence.len() {
            let prefix = &sequence[..len];
            let state = run(prefix.iter().copied().map(FilterCommand::ToggleAmenity));
            for amenity in Amenity::ALL {
                let occurrences = prefix.iter().filter(|a| *a == amenity).count();
                assert_eq!(state.amenities.contains(amenity), occurrences % 2 == 1, "{amenity} after {len} toggles");
            }
        }
    }

    #[test]
    fn toggling_leaves_other_dimensions_alone() {
        let before = run([
            FilterCommand::SelectDestination(Destination::Spain),
            FilterCommand::SetPriceRange(200, 300),
        ]);
        let after = before.clone().apply(FilterCommand::ToggleAmenity(Amenity::HotelBar));
        assert_eq!(after.destination, before.destination);
        assert_eq!(after.price_range, before.price_range);
        assert_eq!(after.amenities.len(), 1);
    }

    #[test]
    fn valid_price_ranges_are_stored_exactly() {
        let state = run([FilterCommand::SetPriceRange(100, 400), FilterCommand::SetPriceRange(50, 900)]);
        assert_eq!(state.price_range, PriceRange::new(50, 900));
        assert_eq!((state.price_range.low(), state.price_range.high()), (50, 900));

        for (low, high) in [(0, 0), (0, 1000), (1000, 1000), (333, 334), (999, 1000)] {
            let state = run([FilterCommand::SetPriceRange(low, high)]);
            assert_eq!((state.price_range.low(), state.price_range.high()), (low, high));
        }
    }

    #[test]
    fn out_of_order_or_out_of_bounds_prices_are_normalized() {
        let state = run([FilterCommand::SetPriceRange(700, 100)]);
        assert_eq!((state.price_range.low(), state.price_range.high()), (100, 700));

        let state = run([FilterCommand::SetPriceRange(20, 5000)]);
        assert_eq!((state.price_range.low(), state.price_range.high()), (20, 1000));
    }

    #[test]
    fn clear_all_resets_every_dimension() {
        let state = run([
            FilterCommand::SelectDestination(Destination::Turkey),
            FilterCommand::SelectStarRating(StarRating::TwoStars),
            FilterCommand::ToggleAmenity(Amenity::Restaurant),
            FilterCommand::ToggleAmenity(Amenity::FreeBreakfast),
            FilterCommand::SelectAccommodationType(AccommodationType::Resort),
            FilterCommand::SetPriceRange(10, 20),
        ]);
        assert_eq!(state.active_filter_count(), 6);

        let cleared = state.apply(FilterCommand::ClearAll);
        assert_eq!(cleared.destination, None);
        assert_eq!(cleared.star_rating, None);
        assert_eq!(cleared.accommodation_type, None);
        assert!(cleared.amenities.is_empty());
        assert!(cleared.price_range.is_full());
        assert!(cleared.is_cleared());
    }

    #[test]
    fn applied_labels_follow_sidebar_order() {
        let state = run([
            FilterCommand::SelectAccommodationType(AccommodationType::Hotel),
            FilterCommand::ToggleAmenity(Amenity::FitnessCenter),
            FilterCommand::SelectDestination(Destination::Croatia),
            FilterCommand::SetPriceRange(100, 400),
        ]);
        assert_eq!(
            state.applied_filter_labels(),
            vec!["Croatia", "$100 - $400", "Fitness center", "Hotel"]
        );
    }

    #[test]
    fn deserialized_price_range_keeps_invariant() {
        let state: FilterState = serde_json::from_str(r#"{"price_range": [900, 2000]}"#).unwrap();
        assert_eq!((state.price_range.low(), state.price_range.high()), (900, 1000));
        assert_eq!(state.destination, None);
    }
}
