use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientBalance = 1,
    InsufficientAllowance = 2,
    InvalidReceiver = 3,
    Overflow = 4,
    Unsupported = 5,
    AlreadyIssued = 6,
}
