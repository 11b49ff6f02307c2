use soroban_sdk::{contracttype, Address};

// Storage key for listing queues (needs struct since it has two fields)
#[derive(Clone)]
#[contracttype]
pub struct ListingKey {
    pub game_id: u64,
    pub price: i128,
}

// Main storage key enum
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    PaymentToken,
    Listings(ListingKey),       // (game_id, price) -> queue of units
    Proceeds(Address),          // seller escrow balance
    GamesBought(Address),       // buyer purchase history
}
