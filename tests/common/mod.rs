use apex_api::db::service::DbService;
use sea_orm::{ConnectOptions, EntityTrait, PaginatorTrait};
use std::sync::Arc;

#[allow(dead_code)]
pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // one pinned connection, an in-memory sqlite database lives and dies with it
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            DbService::connect(options)
                .await
                .expect("Failed to initialize DbService")
        );

        TestContext { db }
    }

    #[allow(dead_code)]
    pub async fn account_count(&self) -> u64 {
        entity::account::Entity::find()
            .count(self.db.connection())
            .await
            .expect("Failed to count accounts")
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use apex_api::types::account::{NewAccount, RAccountRegister};

    pub fn sample_registration() -> RAccountRegister {
        RAccountRegister {
            referral_code: Some("foo_b".to_string()),
            full_name: Some("Foo bar".to_string()),
            email: Some("f@example.com".to_string()),
            password: Some("foob2345".to_string()),
        }
    }

    pub fn sample_account(email: &str) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            full_name: "Test User".to_string(),
            password: Some("correct horse".to_string()),
            referral_code: None,
        }
    }
}
