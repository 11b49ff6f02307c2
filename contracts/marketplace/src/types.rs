use soroban_sdk::{contracterror, contracttype, Address, String as SorobanString};

/// One pending key listed for sale. Lives at the tail of its group's queue
/// until it is bought, cancelled, or relocated to another price.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingUnit {
    pub seller: Address,
    pub game_key: SorobanString,
}

/// One delivered purchase, as returned by `get_games_bought`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchasedGame {
    pub game_id: u64,
    pub game_key: SorobanString,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidPrice = 1,
    NoListingFound = 2,
    IncorrectPayment = 3,
    NoFundsAvailable = 4,
    PayoutFailed = 5,
    SellerMismatch = 6,
}
