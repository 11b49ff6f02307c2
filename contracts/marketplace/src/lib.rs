#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

mod events;
mod storage;
mod storage_types;
mod types;


use types::*;

#[contract]
pub struct GameKeyMarketplace;

/// Helper function to validate that an asking price is positive
fn check_positive_price(price: i128) -> Result<(), Error> {
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }
    Ok(())
}

#[contractimpl]
impl GameKeyMarketplace {
    /// Constructor function that runs automatically during deployment
    ///
    /// The payment token is the asset buyers pay with and sellers withdraw,
    /// typically the deployed native asset contract. For example:
    /// `stellar contract deploy --wasm ... -- --payment_token <token_address>`
    pub fn __constructor(env: Env, payment_token: Address) {
        storage::set_payment_token(&env, &payment_token);
    }

    /// List one game key for sale under (game_id, price)
    /// The key content is accepted verbatim; the seller is paid only when
    /// the key sells.
    pub fn list_game_key(
        env: Env,
        seller: Address,
        game_key: String,
        game_id: u64,
        price: i128,
    ) -> Result<(), Error> {
        seller.require_auth();
        check_positive_price(price)?;

        let unit = ListingUnit {
            seller: seller.clone(),
            game_key,
        };
        storage::push_listing(&env, game_id, price, &unit);

        events::emit_listed_event(&env, game_id, price, &seller);
        Ok(())
    }

    /// Move the oldest listing at (game_id, old_price) to new_price
    /// The unit keeps its recorded seller through the move; exactly one unit
    /// relocates per call, oldest first.
    pub fn update_listing(
        env: Env,
        caller: Address,
        game_id: u64,
        old_price: i128,
        new_price: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        check_positive_price(new_price)?;

        let unit =
            storage::pop_listing(&env, game_id, old_price).ok_or(Error::NoListingFound)?;
        storage::push_listing(&env, game_id, new_price, &unit);

        events::emit_price_updated_event(&env, game_id, old_price, new_price, &unit.seller);
        Ok(())
    }

    /// Remove the oldest listing at (game_id, price) without payment or
    /// delivery. Listing never involved payment, so there is nothing to
    /// refund.
    pub fn cancel_listing(
        env: Env,
        caller: Address,
        game_id: u64,
        price: i128,
    ) -> Result<(), Error> {
        caller.require_auth();

        let unit = storage::pop_listing(&env, game_id, price).ok_or(Error::NoListingFound)?;

        events::emit_cancelled_event(&env, game_id, price, &unit.seller);
        Ok(())
    }

    /// Buy one key listed at (game_id, price)
    ///
    /// `payment` is the value the buyer attaches and must equal the asking
    /// price exactly. `seller` must match the seller recorded on the unit
    /// that is actually consumed (FIFO head).
    pub fn buy_game_key(
        env: Env,
        buyer: Address,
        game_id: u64,
        seller: Address,
        price: i128,
        payment: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();
        log!(&env, "buy_game_key: Starting purchase");

        if payment != price {
            log!(&env, "buy_game_key: ERROR - payment does not equal asking price");
            return Err(Error::IncorrectPayment);
        }

        // Consuming the unit is the atomicity boundary: it leaves the store
        // before any funds move.
        let unit = storage::pop_listing(&env, game_id, price).ok_or(Error::NoListingFound)?;

        if unit.seller != seller {
            log!(&env, "buy_game_key: ERROR - recorded seller does not match");
            return Err(Error::SellerMismatch);
        }

        // Collect the payment into the contract vault
        log!(&env, "buy_game_key: Collecting payment");
        use soroban_sdk::token::TokenClient;
        let token_client = TokenClient::new(&env, &storage::get_payment_token(&env));
        token_client.transfer(&buyer, &env.current_contract_address(), &price);

        // Credit the recorded seller and deliver the key to the buyer
        storage::add_proceeds(&env, &unit.seller, price);
        storage::record_purchase(&env, &buyer, game_id, &unit.game_key);

        log!(&env, "buy_game_key: Purchase completed");
        events::emit_sold_event(&env, game_id, price, &buyer, &unit.seller);
        Ok(())
    }

    /// Pay out the caller's full escrow balance
    pub fn withdraw(env: Env, seller: Address) -> Result<(), Error> {
        seller.require_auth();

        // The balance is zeroed before the payout transfer runs; a
        // re-entrant withdraw observes an empty balance.
        let amount = storage::take_proceeds(&env, &seller);
        if amount == 0 {
            return Err(Error::NoFundsAvailable);
        }

        log!(&env, "withdraw: Paying out seller proceeds");
        use soroban_sdk::token::TokenClient;
        let token_client = TokenClient::new(&env, &storage::get_payment_token(&env));
        if token_client
            .try_transfer(&env.current_contract_address(), &seller, &amount)
            .is_err()
        {
            // Failing the invocation here restores the debited balance.
            log!(&env, "withdraw: ERROR - payout transfer failed");
            return Err(Error::PayoutFailed);
        }

        events::emit_withdraw_event(&env, &seller, amount);
        Ok(())
    }

    /// Get the seller's withdrawable escrow balance
    pub fn get_balance(env: Env, seller: Address) -> i128 {
        storage::get_proceeds(&env, &seller)
    }

    /// Get every (game_id, key) pair delivered to the buyer, in purchase order
    pub fn get_games_bought(env: Env, buyer: Address) -> Vec<PurchasedGame> {
        storage::get_games_bought(&env, &buyer)
    }

    /// Get the configured payment token
    pub fn get_payment_token(env: Env) -> Address {
        storage::get_payment_token(&env)
    }
}
