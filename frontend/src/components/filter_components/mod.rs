//! Filter sidebar: a slide-up sheet with one section per filter dimension.

pub mod applied_filters_strip;
pub mod filter_option_list;
pub mod filter_section;
pub mod filter_sheet;
pub mod price_range_control;
