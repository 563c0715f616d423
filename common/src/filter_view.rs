//! Render model for the filter sidebar.
//!
//! Flattens a [`FilterState`] into the rows the sidebar draws, each row
//! carrying whether it is selected and which command a click dispatches.

use std::collections::BTreeSet;

use crate::filter_labels::{AccommodationType, Amenity, Destination, FilterLabel, StarRating};
use crate::filter_state::{FilterCommand, FilterState, PRICE_MAX, PRICE_MIN, PriceRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub selected: bool,
    pub on_click: FilterCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSidebarView {
    pub destinations: Vec<FilterOption>,
    pub star_ratings: Vec<FilterOption>,
    pub amenities: Vec<FilterOption>,
    pub accommodation_types: Vec<FilterOption>,
    pub price_range: PriceRange,
    pub price_bounds: (u32, u32),
}

impl FilterSidebarView {
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            destinations: exclusive_options::<Destination>(state.destination, FilterCommand::SelectDestination),
            star_ratings: exclusive_options::<StarRating>(state.star_rating, FilterCommand::SelectStarRating),
            amenities: toggle_options::<Amenity>(&state.amenities, FilterCommand::ToggleAmenity),
            accommodation_types: exclusive_options::<AccommodationType>(
                state.accommodation_type,
                FilterCommand::SelectAccommodationType,
            ),
            price_range: state.price_range,
            price_bounds: (PRICE_MIN, PRICE_MAX),
        }
    }

    pub fn selected_count(&self) -> usize {
        [&self.destinations, &self.star_ratings, &self.amenities, &self.accommodation_types]
            .into_iter()
            .flatten()
            .filter(|option| option.selected)
            .count()
    }
}

/// Buttons on the filter sheet that are not option rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetAction {
    CloseIcon,
    Backdrop,
    ApplyFilters,
    ClearAll,
}

/// What a [`SheetAction`] asks of the sheet's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEffect {
    Dispatch(FilterCommand),
    /// Close the sheet, filters untouched.
    Dismiss,
}

impl SheetAction {
    pub fn effect(self) -> SheetEffect {
        match self {
            Self::CloseIcon | Self::Backdrop | Self::ApplyFilters => SheetEffect::Dismiss,
            Self::ClearAll => SheetEffect::Dispatch(FilterCommand::ClearAll),
        }
    }
}

fn exclusive_options<L: FilterLabel>(selected: Option<L>, command: fn(L) -> FilterCommand) -> Vec<FilterOption> {
    L::ALL
        .iter()
        .map(|value| FilterOption {
            label: value.label(),
            selected: selected == Some(*value),
            on_click: command(*value),
        })
        .collect()
}

fn toggle_options<L: FilterLabel>(selected: &BTreeSet<L>, command: fn(L) -> FilterCommand) -> Vec<FilterOption> {
    L::ALL
        .iter()
        .map(|value| FilterOption {
            label: value.label(),
            selected: selected.contains(value),
            on_click: command(*value),
        })
        .collect()
}
