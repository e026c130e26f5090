use soroban_sdk::{contracttype, Address, Bytes};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeItem {
    pub id: u64,
    pub kind: u32,
    pub owner: Option<Address>, // None once burned
    pub purchaser: Address,
    pub purchased_at: u64,     // ledger timestamp, unix seconds
    pub purchased_ledger: u32, // ledger sequence
    pub price: i128,           // amount actually settled, 0 when free
    pub metadata: Bytes,
}

/// Purchase terms for one item kind.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NodeKind {
    pub price: i128,
    pub reward: i128, // Cork credited to the purchaser
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentConfig {
    pub token: Address,
    pub treasury: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Item(u64),
    Kind(u32),
    Balance(Address, u32),
}
