pub mod aggregate;

pub use aggregate::{
    PaymentMethod, PaymentMethodKind, SellerBalance, Withdrawal, WithdrawalStatus,
};
