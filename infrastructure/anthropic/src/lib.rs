pub mod card_scanner;
pub mod client;
