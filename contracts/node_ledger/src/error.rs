use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotFound = 4,
    InvalidPurchaser = 5,
    InvalidArgument = 6,
    NotOwner = 7,
    AlreadyBound = 8,
    RewardMintFailed = 9,
    PaymentFailed = 10,
}
