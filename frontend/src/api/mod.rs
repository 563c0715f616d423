pub mod tours_api;
