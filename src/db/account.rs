use crate::db::service::DbService;
use crate::{
    types::{account::NewAccount, error::AppError},
    utils::{email::normalize_email, password},
};
use chrono::Utc;
use entity::account::{ActiveModel as AccountActive, Column, Entity as Account, Model as AccountModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::{debug, info};
use uuid::Uuid;

impl DbService {
    pub async fn account_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(Account::find()
            .filter(Column::Email.eq(normalize_email(email)))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_account_by_id(&self, id: &Uuid) -> Result<AccountModel, AppError> {
        Ok(Account::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Account does not exist".into()))?)
    }

    pub async fn get_account_by_email(&self, email: &str) -> Result<AccountModel, AppError> {
        Ok(Account::find()
            .filter(Column::Email.eq(normalize_email(email)))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Account does not exist".into()))?)
    }

    /// Signup: the only way an ordinary account gets created.
    pub async fn create_user(&self, payload: NewAccount) -> Result<AccountModel, AppError> {
        let txn = self.database_connection.begin().await?;
        let account = insert_account(&txn, payload).await?;
        txn.commit().await?;

        info!("created account {}", account.id);
        Ok(account)
    }

    /// Creates an account with every administrative flag set. The insert and the
    /// promotion commit together.
    pub async fn create_superuser(
        &self,
        email: &str,
        full_name: &str,
        password: Option<&str>,
    ) -> Result<AccountModel, AppError> {
        let txn = self.database_connection.begin().await?;
        let account = insert_account(
            &txn,
            NewAccount {
                email: email.to_string(),
                full_name: full_name.to_string(),
                password: password.map(str::to_string),
                referral_code: None,
            },
        )
        .await?;

        let mut am: AccountActive = account.into();
        am.is_staff = Set(true);
        am.is_admin = Set(true);
        am.is_superuser = Set(true);
        let account = am.update(&txn).await?;
        txn.commit().await?;

        info!("created superuser {}", account.id);
        Ok(account)
    }

    /// Checks credentials by email and stamps `last_login` on success. Inactive
    /// accounts and accounts without a usable password never authenticate.
    pub async fn authenticate(&self, email: &str, raw_password: &str) -> Result<Option<AccountModel>, AppError> {
        let account = match self.get_account_by_email(email).await {
            Ok(account) => account,
            Err(AppError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };

        if !account.is_active || !password::verify(raw_password, &account.password) {
            debug!("authentication refused for account {}", account.id);
            return Ok(None);
        }

        let mut am: AccountActive = account.into();
        am.last_login = Set(Utc::now());
        Ok(Some(am.update(&self.database_connection).await?))
    }
}

async fn insert_account<C: ConnectionTrait>(conn: &C, payload: NewAccount) -> Result<AccountModel, AppError> {
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("Users must have an email address".into()));
    }
    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("Users must have a full name".into()));
    }

    let email = normalize_email(&payload.email);
    let exists = Account::find()
        .filter(Column::Email.eq(email.as_str()))
        .count(conn)
        .await?
        > 0;
    if exists {
        return Err(AppError::AlreadyExists);
    }

    let now = Utc::now();
    let account = AccountActive {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        full_name: Set(payload.full_name),
        referral_code: Set(payload.referral_code),
        password: Set(password::make_password(payload.password.as_deref())?),
        date_joined: Set(now),
        last_login: Set(now),
        is_active: Set(true),
        is_admin: Set(false),
        is_staff: Set(false),
        is_superuser: Set(false),
    };

    Ok(account.insert(conn).await?)
}
