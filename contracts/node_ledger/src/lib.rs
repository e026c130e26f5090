#![no_std]
use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, Address, Bytes, Env,
};

mod cork;
mod error;
mod storage;
mod types;

pub use error::Error;
pub use types::{NodeItem, NodeKind, PaymentConfig};

use cork::CorkClient;
use storage::*;

#[contract]
pub struct NodeLedger;

#[contractimpl]
impl NodeLedger {
    /// One-time initializer; `admin` plays the deployer role.
    pub fn init(e: Env, admin: Address) -> Result<(), Error> {
        if has_admin(&e) {
            return Err(Error::AlreadyInitialized);
        }
        write_admin(&e, &admin);
        bump_instance(&e);
        Ok(())
    }

    pub fn admin(e: Env) -> Result<Address, Error> {
        read_admin(&e)
    }

    pub fn set_admin(e: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_admin(&e, &caller)?;
        write_admin(&e, &new_admin);
        e.events().publish((symbol_short!("admin"), caller), new_admin);
        Ok(())
    }

    /// Records the paired Cork ledger. The first set binds the pointer; the
    /// same address may be set again, any other fails with `AlreadyBound`.
    pub fn set_cork_addr(e: Env, caller: Address, cork: Address) -> Result<(), Error> {
        Self::require_admin(&e, &caller)?;
        match read_cork(&e) {
            Some(current) if current == cork => return Ok(()),
            Some(_) => return Err(Error::AlreadyBound),
            None => {}
        }
        write_cork(&e, &cork);
        e.events()
            .publish((symbol_short!("bind"), symbol_short!("cork")), cork.clone());
        log!(&e, "node bound to cork ledger", cork);
        Ok(())
    }

    pub fn cork_addr(e: Env) -> Option<Address> {
        read_cork(&e)
    }

    /// True once the Cork ledger points back at this contract.
    pub fn is_linked(e: Env) -> bool {
        Self::linked_cork(&e).is_some()
    }

    pub fn set_kind(
        e: Env,
        caller: Address,
        kind: u32,
        price: i128,
        reward: i128,
    ) -> Result<(), Error> {
        Self::require_admin(&e, &caller)?;
        if price < 0 || reward < 0 {
            return Err(Error::InvalidArgument);
        }
        write_kind(&e, kind, &NodeKind { price, reward });
        e.events().publish((symbol_short!("kind"), kind), (price, reward));
        Ok(())
    }

    pub fn kind(e: Env, kind: u32) -> NodeKind {
        read_kind(&e, kind)
    }

    /// Priced kinds are settled in `token`, paid to `treasury`. Purchasers
    /// approve this registry as spender beforehand.
    pub fn set_payment(
        e: Env,
        caller: Address,
        token: Address,
        treasury: Address,
    ) -> Result<(), Error> {
        Self::require_admin(&e, &caller)?;
        write_payment(&e, &PaymentConfig { token, treasury });
        Ok(())
    }

    pub fn payment(e: Env) -> Option<PaymentConfig> {
        read_payment(&e)
    }

    /// Sell a new node item to `purchaser`.
    ///
    /// Settles the kind's price when a payment token is configured, drawing on
    /// the allowance the purchaser granted this registry. When
    /// this registry holds the Cork vault, credits the kind's reward through
    /// the Cork ledger. A failed reward mint fails the whole purchase.
    pub fn mint(e: Env, purchaser: Address, kind: u32, metadata: Bytes) -> Result<u64, Error> {
        read_admin(&e)?;
        let me = e.current_contract_address();
        let cork = read_cork(&e);
        if purchaser == me || cork.as_ref() == Some(&purchaser) {
            return Err(Error::InvalidPurchaser);
        }
        purchaser.require_auth();
        bump_instance(&e);

        let terms = read_kind(&e, kind);

        let mut price = 0;
        if terms.price > 0 {
            if let Some(payment) = read_payment(&e) {
                Self::settle(&e, &payment, &purchaser, terms.price)?;
                price = terms.price;
            }
        }

        if terms.reward > 0 {
            Self::credit_reward(&e, &purchaser, terms.reward)?;
        }

        let id = next_id(&e);
        let item = NodeItem {
            id,
            kind,
            owner: Some(purchaser.clone()),
            purchaser: purchaser.clone(),
            purchased_at: e.ledger().timestamp(),
            purchased_ledger: e.ledger().sequence(),
            price,
            metadata,
        };
        write_item(&e, &item);
        receive_item(&e, purchaser.clone(), kind);

        e.events()
            .publish((symbol_short!("minted"), id), (purchaser, kind, price));
        Ok(id)
    }

    pub fn get_node_state(e: Env, id: u64) -> Result<NodeItem, Error> {
        read_item(&e, id).ok_or(Error::NotFound)
    }

    pub fn transfer(e: Env, from: Address, to: Address, id: u64) -> Result<(), Error> {
        from.require_auth();
        if to == e.current_contract_address() || read_cork(&e).as_ref() == Some(&to) {
            return Err(Error::InvalidArgument);
        }

        let mut item = read_item(&e, id).ok_or(Error::NotFound)?;
        if item.owner.as_ref() != Some(&from) {
            return Err(Error::NotOwner);
        }

        bump_instance(&e);
        release_item(&e, from.clone(), item.kind);
        receive_item(&e, to.clone(), item.kind);
        item.owner = Some(to.clone());
        write_item(&e, &item);

        e.events().publish((symbol_short!("transfer"), id), (from, to));
        Ok(())
    }

    /// Retire an item. The record stays, with no owner.
    pub fn burn(e: Env, from: Address, id: u64) -> Result<(), Error> {
        from.require_auth();

        let mut item = read_item(&e, id).ok_or(Error::NotFound)?;
        if item.owner.as_ref() != Some(&from) {
            return Err(Error::NotOwner);
        }

        bump_instance(&e);
        release_item(&e, from.clone(), item.kind);
        item.owner = None;
        write_item(&e, &item);

        e.events().publish((symbol_short!("burn"), id), from);
        Ok(())
    }

    /// Items of `kind` currently held by `owner`.
    pub fn balance(e: Env, owner: Address, kind: u32) -> u32 {
        read_balance(&e, owner, kind)
    }

    pub fn total_minted(e: Env) -> u64 {
        total_minted(&e)
    }

    fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != read_admin(e)? {
            return Err(Error::Unauthorized);
        }
        bump_instance(e);
        Ok(())
    }

    fn linked_cork(e: &Env) -> Option<Address> {
        let cork = read_cork(e)?;
        let client = CorkClient::new(e, &cork);
        match client.try_node_address() {
            Ok(Ok(Some(node))) if node == e.current_contract_address() => Some(cork),
            _ => None,
        }
    }

    fn settle(
        e: &Env,
        payment: &PaymentConfig,
        purchaser: &Address,
        price: i128,
    ) -> Result<(), Error> {
        let me = e.current_contract_address();
        let token = token::Client::new(e, &payment.token);
        match token.try_transfer_from(&me, purchaser, &payment.treasury, &price) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::PaymentFailed),
        }
    }

    fn credit_reward(e: &Env, purchaser: &Address, reward: i128) -> Result<(), Error> {
        let Some(cork) = Self::linked_cork(e) else {
            log!(e, "cork not linked, reward skipped", reward);
            return Ok(());
        };
        let me = e.current_contract_address();
        let client = CorkClient::new(e, &cork);
        if client.vault() != Some(me.clone()) {
            log!(e, "no vault authority, reward skipped", reward);
            return Ok(());
        }
        match client.try_mint(&me, purchaser, &reward) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::RewardMintFailed),
        }
    }
}
