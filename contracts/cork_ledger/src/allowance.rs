use soroban_sdk::{Address, Env};
use stellar_tokens::fungible::Base;

use crate::error::Error;

/// An approval must outlive the current ledger and fit in a temporary entry's
/// maximum TTL. A zero approval clears the allowance and is always accepted.
pub fn check_approval(e: &Env, amount: i128, expiration_ledger: u32) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidArgument);
    }
    if amount > 0
        && (expiration_ledger < e.ledger().sequence()
            || expiration_ledger > e.ledger().max_live_until_ledger())
    {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}

pub fn check_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    if Base::allowance(e, from, spender) < amount {
        return Err(Error::InsufficientAllowance);
    }
    Ok(())
}
