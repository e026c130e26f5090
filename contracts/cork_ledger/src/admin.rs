use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage_types::k_admin;

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&k_admin())
}

pub fn read_admin(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&k_admin())
        .ok_or(Error::NotInitialized)
}

pub fn write_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&k_admin(), admin);
}

/// Authenticates `caller` and checks it against the stored admin.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let admin = read_admin(e)?;
    if *caller != admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
