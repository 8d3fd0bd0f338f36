use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(60))")]
pub enum Status {
    #[sea_orm(string_value = "Paid")]
    Paid,
    #[sea_orm(string_value = "Unpaid")]
    Unpaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(60))")]
pub enum TransactionType {
    #[sea_orm(string_value = "Deposit")]
    Deposit,
    #[sea_orm(string_value = "Withdrawal")]
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(5))")]
pub enum Currency {
    #[sea_orm(string_value = "ETH")]
    Eth,
    #[sea_orm(string_value = "BTC")]
    Btc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(100))")]
pub enum Details {
    #[sea_orm(string_value = "Deposit to wallet")]
    DepositToWallet,
    #[sea_orm(string_value = "Withdrawal from wallet")]
    WithdrawalFromWallet,
}

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recent_transaction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub status: Status,
    pub date: DateTimeUtc,
    pub merchant: String,
    pub transaction_type: TransactionType,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    pub currency: Currency,
    #[sea_orm(column_type = "Decimal(Some((9, 2)))")]
    pub tokens: Decimal,
    pub details: Details,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.merchant)
    }
}
