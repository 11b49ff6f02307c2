use soroban_sdk::{contractevent, Address, Env};

// Event topics for better filtering and indexing
// Topics are defined as string literals in the macro
//
// Listing events never carry the key string itself: events are public and
// the key must only reach the buyer through the purchase history.
#[contractevent(topics = ["LIST"])]
#[derive(Clone, Debug)]
pub struct GameKeyListedEvent {
    pub game_id: u64,
    pub price: i128,
    pub seller: Address,
}

#[contractevent(topics = ["UPDATE"])]
#[derive(Clone, Debug)]
pub struct ListingPriceUpdatedEvent {
    pub game_id: u64,
    pub old_price: i128,
    pub new_price: i128,
    pub seller: Address,
}

#[contractevent(topics = ["CANCEL"])]
#[derive(Clone, Debug)]
pub struct ListingCancelledEvent {
    pub game_id: u64,
    pub price: i128,
    pub seller: Address,
}

#[contractevent(topics = ["SALE", "game"])]
#[derive(Clone, Debug)]
pub struct GameKeySoldEvent {
    pub game_id: u64,
    pub price: i128,
    pub buyer: Address,
    pub seller: Address,
}

#[contractevent(topics = ["WITHDRAW"])]
#[derive(Clone, Debug)]
pub struct ProceedsWithdrawnEvent {
    pub seller: Address,
    pub amount: i128,
}

pub fn emit_listed_event(env: &Env, game_id: u64, price: i128, seller: &Address) {
    GameKeyListedEvent {
        game_id,
        price,
        seller: seller.clone(),
    }
    .publish(env);
}

pub fn emit_price_updated_event(
    env: &Env,
    game_id: u64,
    old_price: i128,
    new_price: i128,
    seller: &Address,
) {
    ListingPriceUpdatedEvent {
        game_id,
        old_price,
        new_price,
        seller: seller.clone(),
    }
    .publish(env);
}

pub fn emit_cancelled_event(env: &Env, game_id: u64, price: i128, seller: &Address) {
    ListingCancelledEvent {
        game_id,
        price,
        seller: seller.clone(),
    }
    .publish(env);
}

pub fn emit_sold_event(env: &Env, game_id: u64, price: i128, buyer: &Address, seller: &Address) {
    GameKeySoldEvent {
        game_id,
        price,
        buyer: buyer.clone(),
        seller: seller.clone(),
    }
    .publish(env);
}

pub fn emit_withdraw_event(env: &Env, seller: &Address, amount: i128) {
    ProceedsWithdrawnEvent {
        seller: seller.clone(),
        amount,
    }
    .publish(env);
}
