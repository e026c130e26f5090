use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::error::Error;
use crate::types::{DataKey, NodeItem, NodeKind, PaymentConfig};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const ITEM_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ITEM_LIFETIME_THRESHOLD: u32 = ITEM_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn k_admin() -> Symbol { symbol_short!("admin") }
pub fn k_cork() -> Symbol { symbol_short!("cork") }
pub fn k_next() -> Symbol { symbol_short!("next") }
pub fn k_payment() -> Symbol { symbol_short!("payment") }

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_entry(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, ITEM_LIFETIME_THRESHOLD, ITEM_BUMP_AMOUNT);
}

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

pub fn read_cork(e: &Env) -> Option<Address> {
    e.storage().instance().get(&k_cork())
}

pub fn write_cork(e: &Env, cork: &Address) {
    e.storage().instance().set(&k_cork(), cork);
}

pub fn read_payment(e: &Env) -> Option<PaymentConfig> {
    e.storage().instance().get(&k_payment())
}

pub fn write_payment(e: &Env, payment: &PaymentConfig) {
    e.storage().instance().set(&k_payment(), payment);
}

pub fn next_id(e: &Env) -> u64 {
    let k = k_next();
    let mut n: u64 = e.storage().instance().get(&k).unwrap_or(0);
    n += 1;
    e.storage().instance().set(&k, &n);
    n
}

pub fn total_minted(e: &Env) -> u64 {
    e.storage().instance().get(&k_next()).unwrap_or(0)
}

pub fn read_item(e: &Env, id: u64) -> Option<NodeItem> {
    let key = DataKey::Item(id);
    let item = e.storage().persistent().get(&key);
    if item.is_some() {
        bump_entry(e, &key);
    }
    item
}

pub fn write_item(e: &Env, item: &NodeItem) {
    let key = DataKey::Item(item.id);
    e.storage().persistent().set(&key, item);
    bump_entry(e, &key);
}

pub fn read_kind(e: &Env, kind: u32) -> NodeKind {
    e.storage()
        .persistent()
        .get(&DataKey::Kind(kind))
        .unwrap_or_default()
}

pub fn write_kind(e: &Env, kind: u32, terms: &NodeKind) {
    let key = DataKey::Kind(kind);
    e.storage().persistent().set(&key, terms);
    bump_entry(e, &key);
}

pub fn read_balance(e: &Env, owner: Address, kind: u32) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(owner, kind))
        .unwrap_or(0)
}

fn write_balance(e: &Env, owner: Address, kind: u32, count: u32) {
    let key = DataKey::Balance(owner, kind);
    e.storage().persistent().set(&key, &count);
    bump_entry(e, &key);
}

pub fn receive_item(e: &Env, owner: Address, kind: u32) {
    let count = read_balance(e, owner.clone(), kind);
    write_balance(e, owner, kind, count + 1);
}

pub fn release_item(e: &Env, owner: Address, kind: u32) {
    let count = read_balance(e, owner.clone(), kind);
    write_balance(e, owner, kind, count.saturating_sub(1));
}
