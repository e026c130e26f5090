use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidArgument = 4,
    SupplyExceeded = 5,
    AlreadyBound = 6,
    VaultNotReady = 7,
    InsufficientBalance = 8,
    InsufficientAllowance = 9,
}
