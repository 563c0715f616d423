pub mod home_page;
pub mod top_excursions_page;
pub mod tours_page;
