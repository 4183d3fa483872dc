//! Reply bank and rotation policy.

pub mod bank;
pub mod policy;

pub use bank::ReplyBank;
pub use policy::{
    CATEGORY_RULES, CategoryRule, ReplyCategory, ReplyPolicy, SelectedReply, classify_category,
};
