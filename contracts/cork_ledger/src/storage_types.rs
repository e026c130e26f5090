use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Instance storage keys. Balances, allowances, supply and cap live under
// the fungible `Base` keys.
pub fn k_admin() -> Symbol { symbol_short!("admin") }
pub fn k_node() -> Symbol { symbol_short!("node") }
pub fn k_vault() -> Symbol { symbol_short!("vault") }

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// The single capability allowed to mint. `ready` flips once, on `init_vault`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintAuthority {
    pub vault: Address,
    pub ready: bool,
}

impl MintAuthority {
    pub fn permits(&self, minter: &Address) -> bool {
        self.vault == *minter
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MintState {
    Uninitialized,
    VaultSet,
    Ready,
}
