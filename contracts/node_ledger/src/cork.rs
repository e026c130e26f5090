use soroban_sdk::{contractclient, Address, Env};

/// The part of the Cork ledger this registry calls into.
#[contractclient(name = "CorkClient")]
pub trait CorkInterface {
    fn node_address(e: Env) -> Option<Address>;
    fn vault(e: Env) -> Option<Address>;
    fn mint(e: Env, minter: Address, to: Address, amount: i128);
}
