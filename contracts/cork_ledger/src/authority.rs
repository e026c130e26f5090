use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage_types::{k_vault, MintAuthority, MintState};

pub fn read_authority(e: &Env) -> Option<MintAuthority> {
    e.storage().instance().get(&k_vault())
}

fn write_authority(e: &Env, authority: &MintAuthority) {
    e.storage().instance().set(&k_vault(), authority);
}

pub fn read_vault(e: &Env) -> Option<Address> {
    read_authority(e).map(|a| a.vault)
}

pub fn mint_state(e: &Env) -> MintState {
    match read_authority(e) {
        None => MintState::Uninitialized,
        Some(a) if a.ready => MintState::Ready,
        Some(_) => MintState::VaultSet,
    }
}

/// Rotates the vault. A ready authority stays ready.
pub fn write_vault(e: &Env, vault: &Address) {
    let ready = read_authority(e).map(|a| a.ready).unwrap_or(false);
    write_authority(
        e,
        &MintAuthority {
            vault: vault.clone(),
            ready,
        },
    );
}

pub fn init_vault(e: &Env, vault: &Address) -> Result<(), Error> {
    if mint_state(e) == MintState::Ready {
        return Err(Error::AlreadyInitialized);
    }
    write_authority(
        e,
        &MintAuthority {
            vault: vault.clone(),
            ready: true,
        },
    );
    Ok(())
}

/// Mint gate: the minter must be the vault, and the vault must be bootstrapped.
pub fn require_minter(e: &Env, minter: &Address) -> Result<(), Error> {
    let authority = read_authority(e).ok_or(Error::Unauthorized)?;
    if !authority.permits(minter) {
        return Err(Error::Unauthorized);
    }
    if !authority.ready {
        return Err(Error::VaultNotReady);
    }
    Ok(())
}
