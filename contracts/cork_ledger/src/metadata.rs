use soroban_sdk::{Env, String};
use stellar_tokens::fungible::Base;

pub const DECIMALS: u32 = 0;
pub const NAME: &str = "Cork";
pub const SYMBOL: &str = "CORK";

pub fn write_metadata(e: &Env) {
    Base::set_metadata(
        e,
        DECIMALS,
        String::from_str(e, NAME),
        String::from_str(e, SYMBOL),
    );
}
