//! Accounts and the organization hierarchy.

mod account;
mod organ;

pub use account::{
    Account, AccountCreate, AccountListQuery, AccountUpdate, PasswordChange, PasswordUpdate,
    UsernameRequest,
};
pub use organ::{Organ, OrganCreate, OrganListQuery, OrganUpdate};
