use crate::storage_types::*;
use crate::types::*;
use soroban_sdk::{Address, Env, String as SorobanString, Vec};

pub fn set_payment_token(env: &Env, token: &Address) {
    let key = DataKey::PaymentToken;
    env.storage().instance().set(&key, token);
}

pub fn get_payment_token(env: &Env) -> Address {
    let key = DataKey::PaymentToken;
    env.storage().instance().get(&key).unwrap()
}

fn listing_key(game_id: u64, price: i128) -> DataKey {
    DataKey::Listings(ListingKey { game_id, price })
}

/// Append a unit to the tail of the (game_id, price) queue, creating the
/// group if it does not exist yet.
pub fn push_listing(env: &Env, game_id: u64, price: i128, unit: &ListingUnit) {
    let key = listing_key(game_id, price);
    let mut queue: Vec<ListingUnit> = env
        .storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    queue.push_back(unit.clone());
    env.storage().instance().set(&key, &queue);
}

/// Remove and return the oldest unit at (game_id, price). Returns `None`
/// when the group is absent. A group whose queue empties is deleted from
/// storage, so an absent group and an empty one are indistinguishable.
pub fn pop_listing(env: &Env, game_id: u64, price: i128) -> Option<ListingUnit> {
    let key = listing_key(game_id, price);
    let mut queue: Vec<ListingUnit> = env.storage().instance().get(&key)?;
    let unit = queue.pop_front()?;
    if queue.is_empty() {
        env.storage().instance().remove(&key);
    } else {
        env.storage().instance().set(&key, &queue);
    }
    Some(unit)
}

/// Get seller escrow balance (accumulated sale proceeds)
pub fn get_proceeds(env: &Env, seller: &Address) -> i128 {
    let key = DataKey::Proceeds(seller.clone());
    env.storage().instance().get(&key).unwrap_or(0)
}

/// Credit a completed sale to the seller's escrow balance
pub fn add_proceeds(env: &Env, seller: &Address, amount: i128) {
    let key = DataKey::Proceeds(seller.clone());
    let current: i128 = env.storage().instance().get(&key).unwrap_or(0);
    env.storage().instance().set(&key, &(current + amount));
}

/// Read the seller's escrow balance and reset it to zero, returning the
/// prior amount. The balance reaches zero before any payout transfer runs,
/// so a re-entrant withdraw observes nothing left to take.
pub fn take_proceeds(env: &Env, seller: &Address) -> i128 {
    let key = DataKey::Proceeds(seller.clone());
    let current: i128 = env.storage().instance().get(&key).unwrap_or(0);
    if current > 0 {
        env.storage().instance().remove(&key);
    }
    current
}

/// Append a delivered (game_id, key) pair to the buyer's purchase history
pub fn record_purchase(env: &Env, buyer: &Address, game_id: u64, game_key: &SorobanString) {
    let key = DataKey::GamesBought(buyer.clone());
    let mut bought: Vec<PurchasedGame> = env
        .storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    bought.push_back(PurchasedGame {
        game_id,
        game_key: game_key.clone(),
    });
    env.storage().instance().set(&key, &bought);
}

/// Full purchase history for a buyer, in delivery order
pub fn get_games_bought(env: &Env, buyer: &Address) -> Vec<PurchasedGame> {
    let key = DataKey::GamesBought(buyer.clone());
    env.storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}
