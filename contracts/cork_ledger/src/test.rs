#![cfg(test)]
extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Ledger},
    Address, Env, IntoVal, String,
};

use crate::{CorkLedger, CorkLedgerClient, Error, MintState};

fn create_cork<'a>(e: &Env, cap: i128) -> (CorkLedgerClient<'a>, Address) {
    let admin = Address::generate(e);
    let contract_id = e.register(CorkLedger, ());
    let client = CorkLedgerClient::new(e, &contract_id);
    client.init(&admin, &cap);
    (client, admin)
}

fn ready_cork<'a>(e: &Env, cap: i128) -> (CorkLedgerClient<'a>, Address, Address) {
    let (client, admin) = create_cork(e, cap);
    let vault = Address::generate(e);
    client.set_vault(&admin, &vault);
    client.init_vault(&admin, &vault);
    (client, admin, vault)
}

#[test]
fn test_init() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, admin) = create_cork(&e, 10000);

    assert_eq!(cork.admin(), admin);
    assert_eq!(cork.supply_cap(), 10000);
    assert_eq!(cork.total_supply(), 0);
    assert_eq!(cork.decimals(), 0);
    assert_eq!(cork.name(), String::from_str(&e, "Cork"));
    assert_eq!(cork.symbol(), String::from_str(&e, "CORK"));
    assert_eq!(cork.node_address(), None);
    assert_eq!(cork.vault(), None);
    assert_eq!(cork.mint_state(), MintState::Uninitialized);
}

#[test]
fn test_double_init_rejected() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, admin) = create_cork(&e, 10000);
    assert_eq!(
        cork.try_init(&admin, &500),
        Err(Ok(Error::AlreadyInitialized))
    );
    assert_eq!(cork.supply_cap(), 10000);
}

#[test]
fn test_negative_cap_rejected() {
    let e = Env::default();
    let admin = Address::generate(&e);
    let contract_id = e.register(CorkLedger, ());
    let cork = CorkLedgerClient::new(&e, &contract_id);

    assert_eq!(cork.try_init(&admin, &-1), Err(Ok(Error::InvalidArgument)));
}

#[test]
fn test_set_node_round_trip() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, admin) = create_cork(&e, 10000);
    let node = Address::generate(&e);

    cork.set_node(&admin, &node);
    assert_eq!(cork.node_address(), Some(node.clone()));

    // same address again is accepted, a different one is not
    cork.set_node(&admin, &node);
    assert_eq!(
        cork.try_set_node(&admin, &Address::generate(&e)),
        Err(Ok(Error::AlreadyBound))
    );
    assert_eq!(cork.node_address(), Some(node));
}

#[test]
fn test_set_node_requires_admin() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, _admin) = create_cork(&e, 10000);
    let stranger = Address::generate(&e);

    assert_eq!(
        cork.try_set_node(&stranger, &Address::generate(&e)),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(cork.node_address(), None);
}

#[test]
fn test_set_vault() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, admin) = create_cork(&e, 10000);
    let vault = Address::generate(&e);

    cork.set_vault(&admin, &vault);
    assert_eq!(cork.vault(), Some(vault));
    assert_eq!(cork.mint_state(), MintState::VaultSet);

    let stranger = Address::generate(&e);
    assert_eq!(
        cork.try_set_vault(&stranger, &stranger),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_init_vault_only_once() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, admin) = create_cork(&e, 10000);
    let vault = Address::generate(&e);

    cork.init_vault(&admin, &vault);
    assert_eq!(cork.mint_state(), MintState::Ready);
    assert_eq!(cork.vault(), Some(vault.clone()));

    assert_eq!(
        cork.try_init_vault(&admin, &Address::generate(&e)),
        Err(Ok(Error::AlreadyInitialized))
    );
    assert_eq!(cork.vault(), Some(vault));
}

#[test]
fn test_vault_rotation_keeps_ready() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, admin, old_vault) = ready_cork(&e, 10000);
    let new_vault = Address::generate(&e);
    let user = Address::generate(&e);

    cork.set_vault(&admin, &new_vault);
    assert_eq!(cork.mint_state(), MintState::Ready);

    assert_eq!(
        cork.try_mint(&old_vault, &user, &10),
        Err(Ok(Error::Unauthorized))
    );
    cork.mint(&new_vault, &user, &10);
    assert_eq!(cork.balance(&user), 10);
}

#[test]
fn test_mint() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, _admin, vault) = ready_cork(&e, 10000);
    let user = Address::generate(&e);

    cork.mint(&vault, &user, &1000);
    assert_eq!(
        e.auths(),
        std::vec![(
            vault.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    cork.address.clone(),
                    symbol_short!("mint"),
                    (&vault, &user, 1000_i128).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert_eq!(cork.balance(&user), 1000);
    assert_eq!(cork.total_supply(), 1000);
}

#[test]
fn test_mint_by_non_vault_rejected() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, admin, _vault) = ready_cork(&e, 10000);
    let user = Address::generate(&e);

    assert_eq!(cork.try_mint(&admin, &user, &1), Err(Ok(Error::Unauthorized)));
    assert_eq!(cork.try_mint(&user, &user, &1), Err(Ok(Error::Unauthorized)));
    assert_eq!(cork.balance(&user), 0);
    assert_eq!(cork.total_supply(), 0);
}

#[test]
fn test_mint_gate_states() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, admin) = create_cork(&e, 10000);
    let vault = Address::generate(&e);
    let user = Address::generate(&e);

    // no vault at all
    assert_eq!(cork.try_mint(&vault, &user, &1), Err(Ok(Error::Unauthorized)));

    cork.set_vault(&admin, &vault);
    assert_eq!(cork.try_mint(&vault, &user, &1), Err(Ok(Error::VaultNotReady)));

    cork.init_vault(&admin, &vault);
    cork.mint(&vault, &user, &1);
    assert_eq!(cork.balance(&user), 1);
}

#[test]
fn test_mint_up_to_cap() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, _admin, vault) = ready_cork(&e, 10000);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);

    cork.mint(&vault, &alice, &6000);
    assert_eq!(
        cork.try_mint(&vault, &bob, &4001),
        Err(Ok(Error::SupplyExceeded))
    );
    assert_eq!(cork.balance(&bob), 0);
    assert_eq!(cork.total_supply(), 6000);

    cork.mint(&vault, &bob, &4000);
    assert_eq!(cork.total_supply(), 10000);
    assert_eq!(
        cork.try_mint(&vault, &bob, &1),
        Err(Ok(Error::SupplyExceeded))
    );
    assert_eq!(cork.balance(&alice) + cork.balance(&bob), cork.supply_cap());
}

#[test]
fn test_negative_mint_rejected() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, _admin, vault) = ready_cork(&e, 10000);
    let user = Address::generate(&e);

    assert_eq!(
        cork.try_mint(&vault, &user, &-5),
        Err(Ok(Error::InvalidArgument))
    );
}

#[test]
fn test_balance_of_unknown_is_zero() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, _admin) = create_cork(&e, 10000);
    assert_eq!(cork.balance(&Address::generate(&e)), 0);
}

#[test]
fn test_approve_overwrites() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, _admin) = create_cork(&e, 10000);
    let owner = Address::generate(&e);
    let spender = Address::generate(&e);

    assert_eq!(cork.allowance(&owner, &spender), 0);

    cork.approve(&owner, &spender, &500, &200);
    assert_eq!(cork.allowance(&owner, &spender), 500);

    cork.approve(&owner, &spender, &120, &200);
    assert_eq!(cork.allowance(&owner, &spender), 120);
}

#[test]
fn test_allowance_expires() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, _admin) = create_cork(&e, 10000);
    let owner = Address::generate(&e);
    let spender = Address::generate(&e);

    cork.approve(&owner, &spender, &500, &100);
    e.ledger().set_sequence_number(101);
    assert_eq!(cork.allowance(&owner, &spender), 0);

    assert_eq!(
        cork.try_approve(&owner, &spender, &500, &50),
        Err(Ok(Error::InvalidArgument))
    );
}

#[test]
fn test_approve_beyond_max_ttl_rejected() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, _admin) = create_cork(&e, 10000);
    let owner = Address::generate(&e);
    let spender = Address::generate(&e);

    assert_eq!(
        cork.try_approve(&owner, &spender, &5, &u32::MAX),
        Err(Ok(Error::InvalidArgument))
    );
    assert_eq!(cork.allowance(&owner, &spender), 0);

    let furthest = e.ledger().max_live_until_ledger();
    cork.approve(&owner, &spender, &5, &furthest);
    assert_eq!(cork.allowance(&owner, &spender), 5);
}

#[test]
fn test_transfer_and_transfer_from() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, _admin, vault) = ready_cork(&e, 10000);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let spender = Address::generate(&e);

    cork.mint(&vault, &alice, &1000);
    cork.transfer(&alice, &bob, &300);
    assert_eq!(cork.balance(&alice), 700);
    assert_eq!(cork.balance(&bob), 300);

    assert_eq!(
        cork.try_transfer(&bob, &alice, &301),
        Err(Ok(Error::InsufficientBalance))
    );

    cork.approve(&alice, &spender, &200, &1000);
    assert_eq!(
        cork.try_transfer_from(&spender, &alice, &bob, &201),
        Err(Ok(Error::InsufficientAllowance))
    );
    cork.transfer_from(&spender, &alice, &bob, &150);
    assert_eq!(cork.allowance(&alice, &spender), 50);
    assert_eq!(cork.balance(&alice), 550);
    assert_eq!(cork.balance(&bob), 450);
    assert_eq!(cork.total_supply(), 1000);
}

#[test]
fn test_set_admin() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, admin) = create_cork(&e, 10000);
    let next = Address::generate(&e);

    cork.set_admin(&admin, &next);
    assert_eq!(cork.admin(), next);
    assert_eq!(
        cork.try_set_vault(&admin, &admin),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_vault_bootstrap_flow() {
    let e = Env::default();
    e.mock_all_auths();

    let (cork, owner) = create_cork(&e, 10000);
    let mint_contract = Address::generate(&e);
    let initial_mint = 9_i128;

    cork.init_vault(&owner, &owner);
    cork.mint(&owner, &owner, &initial_mint);
    assert_eq!(cork.balance(&owner), initial_mint);

    cork.approve(&owner, &mint_contract, &initial_mint, &1000);
    assert_eq!(cork.allowance(&owner, &mint_contract), initial_mint);
}
