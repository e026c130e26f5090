use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String};
use stellar_tokens::fungible::Base;

use crate::admin::{has_admin, read_admin, require_admin, write_admin};
use crate::allowance::{check_allowance, check_approval};
use crate::authority;
use crate::balance::{check_balance, check_supply, read_supply_cap, write_supply_cap};
use crate::error::Error;
use crate::link::{bind_node, read_node};
use crate::metadata::write_metadata;
use crate::storage_types::{bump_instance, MintState};

fn check_nonnegative_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}

#[contract]
pub struct CorkLedger;

#[contractimpl]
impl CorkLedger {
    /// One-time initializer. `supply_cap` bounds the sum of every mint for the
    /// life of the ledger.
    pub fn init(e: Env, admin: Address, supply_cap: i128) -> Result<(), Error> {
        if has_admin(&e) {
            return Err(Error::AlreadyInitialized);
        }
        check_nonnegative_amount(supply_cap)?;

        write_admin(&e, &admin);
        write_supply_cap(&e, supply_cap);
        write_metadata(&e);
        bump_instance(&e);
        log!(&e, "cork ledger initialized", admin, supply_cap);
        Ok(())
    }

    pub fn admin(e: Env) -> Result<Address, Error> {
        read_admin(&e)
    }

    pub fn set_admin(e: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        require_admin(&e, &caller)?;
        bump_instance(&e);
        write_admin(&e, &new_admin);
        e.events().publish((symbol_short!("admin"), caller), new_admin);
        Ok(())
    }

    /// Records the paired node ledger. Locks after the first set.
    pub fn set_node(e: Env, caller: Address, node: Address) -> Result<(), Error> {
        require_admin(&e, &caller)?;
        bump_instance(&e);
        if bind_node(&e, &node)? {
            e.events()
                .publish((symbol_short!("bind"), symbol_short!("node")), node.clone());
            log!(&e, "cork bound to node ledger", node);
        }
        Ok(())
    }

    pub fn node_address(e: Env) -> Option<Address> {
        read_node(&e)
    }

    /// Designates the sole address allowed to mint.
    pub fn set_vault(e: Env, caller: Address, vault: Address) -> Result<(), Error> {
        require_admin(&e, &caller)?;
        bump_instance(&e);
        authority::write_vault(&e, &vault);
        e.events().publish((symbol_short!("vault"),), vault);
        Ok(())
    }

    pub fn vault(e: Env) -> Option<Address> {
        authority::read_vault(&e)
    }

    /// Bootstraps the mint gate. Can only ever succeed once.
    pub fn init_vault(e: Env, caller: Address, vault: Address) -> Result<(), Error> {
        require_admin(&e, &caller)?;
        bump_instance(&e);
        authority::init_vault(&e, &vault)?;
        e.events().publish((symbol_short!("vault_ini"),), vault.clone());
        log!(&e, "vault ready", vault);
        Ok(())
    }

    pub fn mint_state(e: Env) -> MintState {
        authority::mint_state(&e)
    }

    /// Credits `to` with freshly issued Cork. Only the vault may call this, and
    /// the running total may never pass the supply cap.
    pub fn mint(e: Env, minter: Address, to: Address, amount: i128) -> Result<(), Error> {
        minter.require_auth();
        authority::require_minter(&e, &minter)?;
        check_nonnegative_amount(amount)?;
        check_supply(&e, amount)?;

        bump_instance(&e);
        Base::mint(&e, &to, amount);
        log!(&e, "minted", amount, Base::total_supply(&e));
        Ok(())
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        bump_instance(&e);
        Base::balance(&e, &id)
    }

    /// Sets (never adds to) the allowance `spender` may draw from `from`.
    pub fn approve(
        e: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        check_approval(&e, amount, expiration_ledger)?;

        bump_instance(&e);
        Base::approve(&e, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&e);
        Base::allowance(&e, &from, &spender)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        check_nonnegative_amount(amount)?;
        check_balance(&e, &from, amount)?;

        bump_instance(&e);
        Base::transfer(&e, &from, &to, amount);
        Ok(())
    }

    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        check_nonnegative_amount(amount)?;
        check_allowance(&e, &from, &spender, amount)?;
        check_balance(&e, &from, amount)?;

        bump_instance(&e);
        Base::transfer_from(&e, &spender, &from, &to, amount);
        Ok(())
    }

    pub fn total_supply(e: Env) -> i128 {
        Base::total_supply(&e)
    }

    pub fn supply_cap(e: Env) -> Result<i128, Error> {
        read_supply_cap(&e)
    }

    pub fn decimals(e: Env) -> u32 {
        Base::decimals(&e)
    }

    pub fn name(e: Env) -> String {
        Base::name(&e)
    }

    pub fn symbol(e: Env) -> String {
        Base::symbol(&e)
    }
}
