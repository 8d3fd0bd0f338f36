pub mod account;
pub mod recent_transaction;

/*
 Accounts are keyed by email, there is no username column.
 recent_transaction has no link to account. Nothing in the api reads or
 writes it yet, it is only schema.
 */
