mod common;

use common::TestContext;
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn test_migrations_create_both_tables() {
    let ctx = TestContext::new().await;

    assert_eq!(ctx.account_count().await, 0);

    let transactions = entity::recent_transaction::Entity::find()
        .count(ctx.db.connection())
        .await
        .expect("recent_transaction table should exist");
    assert_eq!(transactions, 0);
}
