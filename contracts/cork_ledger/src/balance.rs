use soroban_sdk::{Address, Env};
use stellar_tokens::fungible::{
    capped::{query_cap, set_cap},
    Base,
};

use crate::admin::has_admin;
use crate::error::Error;

pub fn check_balance(e: &Env, addr: &Address, amount: i128) -> Result<(), Error> {
    if Base::balance(e, addr) < amount {
        return Err(Error::InsufficientBalance);
    }
    Ok(())
}

pub fn write_supply_cap(e: &Env, cap: i128) {
    set_cap(e, cap);
}

pub fn read_supply_cap(e: &Env) -> Result<i128, Error> {
    if !has_admin(e) {
        return Err(Error::NotInitialized);
    }
    Ok(query_cap(e))
}

/// Fails unless `amount` still fits under the cap.
pub fn check_supply(e: &Env, amount: i128) -> Result<(), Error> {
    let cap = read_supply_cap(e)?;
    let next = Base::total_supply(e)
        .checked_add(amount)
        .ok_or(Error::SupplyExceeded)?;
    if next > cap {
        return Err(Error::SupplyExceeded);
    }
    Ok(())
}
