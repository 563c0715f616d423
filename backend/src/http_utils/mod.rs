pub mod tours_api_client;
