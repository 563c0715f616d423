pub mod excursion_search_bar;
pub mod tour_card;
pub mod tours_listing;
