use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage_types::k_node;

pub fn read_node(e: &Env) -> Option<Address> {
    e.storage().instance().get(&k_node())
}

/// Binds the node ledger pointer. The first write wins; repeating it with the
/// same address is a no-op.
pub fn bind_node(e: &Env, node: &Address) -> Result<bool, Error> {
    match read_node(e) {
        Some(current) if current == *node => Ok(false),
        Some(_) => Err(Error::AlreadyBound),
        None => {
            e.storage().instance().set(&k_node(), node);
            Ok(true)
        }
    }
}
