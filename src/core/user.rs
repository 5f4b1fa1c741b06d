//! User provisioning - Account creation, natural-key lookup and credentials.
//!
//! Emails are normalized before they are stored or looked up, so the same
//! address always maps to the same account. Passwords only ever reach the
//! database as bcrypt hashes; creating a user without a password stores an
//! unusable marker that no password verifies against.
//!
//! Access is described by three plain flags on the user row. [`Capabilities`]
//! answers permission questions from those flags without touching the database.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::{debug, info, instrument, warn};

#[cfg(not(test))]
const HASH_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
const HASH_COST: u32 = 4;

const UNUSABLE_PASSWORD_PREFIX: char = '!';

/// Profile fields and optional flag overrides for a new account.
///
/// Flags left as `None` take the account type's default: active, not staff,
/// not superuser for regular users; staff and superuser for administrators.
#[derive(Debug, Clone, Default)]
pub struct UserFields {
    pub name: String,
    pub last_name: String,
    pub phone: String,
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}

/// Access flags of a user, evaluated without further queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl Capabilities {
    /// Inactive accounts cannot log in.
    #[must_use]
    pub const fn can_authenticate(self) -> bool {
        self.is_active
    }

    /// Staff members may use the back office.
    #[must_use]
    pub const fn can_access_admin(self) -> bool {
        self.is_active && self.is_staff
    }

    /// Superusers hold every permission without it being granted explicitly.
    #[must_use]
    pub const fn has_all_permissions(self) -> bool {
        self.is_active && self.is_superuser
    }
}

impl From<&user::Model> for Capabilities {
    fn from(user: &user::Model) -> Self {
        Self {
            is_active: user.is_active,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
        }
    }
}

/// Normalizes an email address: surrounding whitespace is removed and the
/// domain part (after the last `@`) is lowercased. The local part is kept as is.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

fn hash_password(password: Option<&str>) -> Result<String> {
    match password {
        Some(password) => bcrypt::hash(password, HASH_COST).map_err(Into::into),
        None => Ok(format!(
            "{UNUSABLE_PASSWORD_PREFIX}{}",
            Uuid::new_v4().simple()
        )),
    }
}

/// Checks a candidate password against the user's stored hash.
///
/// Always false for accounts created without a password.
pub fn check_password(user: &user::Model, password: &str) -> Result<bool> {
    if user.password.starts_with(UNUSABLE_PASSWORD_PREFIX) {
        return Ok(false);
    }
    bcrypt::verify(password, &user.password).map_err(Into::into)
}

/// Creates a regular user account.
///
/// # Errors
/// Returns an error if:
/// - The email is empty or whitespace-only ([`Error::MissingEmail`])
/// - Password hashing fails
/// - The email or phone is already registered ([`Error::Conflict`])
#[instrument(skip(db, password, fields))]
pub async fn create_user(
    db: &DatabaseConnection,
    email: &str,
    password: Option<&str>,
    fields: UserFields,
) -> Result<user::Model> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(Error::MissingEmail);
    }

    let user = user::ActiveModel {
        user_id: Set(Uuid::new_v4()),
        email: Set(email),
        password: Set(hash_password(password)?),
        name: Set(fields.name),
        last_name: Set(fields.last_name),
        phone: Set(fields.phone),
        date_registered: Set(chrono::Utc::now()),
        last_login: Set(None),
        is_active: Set(fields.is_active.unwrap_or(true)),
        is_staff: Set(fields.is_staff.unwrap_or(false)),
        is_superuser: Set(fields.is_superuser.unwrap_or(false)),
    };

    let user = user
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "User"))?;
    info!(user_id = %user.user_id, "Created user");
    Ok(user)
}

/// Creates an administrator: a regular user whose staff and superuser flags
/// default to true unless explicitly overridden in `fields`.
pub async fn create_superuser(
    db: &DatabaseConnection,
    email: &str,
    password: Option<&str>,
    mut fields: UserFields,
) -> Result<user::Model> {
    fields.is_staff.get_or_insert(true);
    fields.is_superuser.get_or_insert(true);
    create_user(db, email, password, fields).await
}

/// Finds a user by email, normalizing the lookup key the same way emails are stored.
pub async fn find_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Email.eq(normalize_email(email)))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Looks a user up by natural key (the email).
///
/// # Errors
/// Returns [`Error::NotFound`] if no account uses this email.
pub async fn get_by_natural_key(db: &DatabaseConnection, email: &str) -> Result<user::Model> {
    find_user_by_email(db, email)
        .await?
        .ok_or_else(|| Error::not_found("User", normalize_email(email)))
}

/// Retrieves a user by primary key.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: Uuid) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Verifies credentials and records the login time.
///
/// Returns `None` for an unknown email, a wrong password or an inactive account.
#[instrument(skip(db, password))]
pub async fn authenticate(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<Option<user::Model>> {
    let Some(user) = find_user_by_email(db, email).await? else {
        debug!("Unknown email");
        return Ok(None);
    };

    if !check_password(&user, password)? {
        warn!(user_id = %user.user_id, "Password mismatch");
        return Ok(None);
    }

    if !Capabilities::from(&user).can_authenticate() {
        warn!(user_id = %user.user_id, "Inactive account tried to log in");
        return Ok(None);
    }

    let mut active: user::ActiveModel = user.into();
    active.last_login = Set(Some(chrono::Utc::now()));
    active.update(db).await.map(Some).map_err(Into::into)
}

/// Replaces the stored password hash. `None` makes the password unusable.
pub async fn set_password(
    db: &DatabaseConnection,
    user_id: Uuid,
    password: Option<&str>,
) -> Result<user::Model> {
    let mut user: user::ActiveModel = User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("User", user_id))?
        .into();

    user.password = Set(hash_password(password)?);
    user.update(db).await.map_err(Into::into)
}

/// Enables or disables an account.
pub async fn set_active(db: &DatabaseConnection, user_id: Uuid, active: bool) -> Result<user::Model> {
    let mut user: user::ActiveModel = User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("User", user_id))?
        .into();

    user.is_active = Set(active);
    user.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("Alice@Example.COM"), "Alice@example.com");
        assert_eq!(normalize_email("  a@B.com \n"), "a@b.com");
        assert_eq!(normalize_email("a@b.com"), "a@b.com");
        assert_eq!(normalize_email("no-at-sign"), "no-at-sign");
        assert_eq!(normalize_email("   "), "");
    }

    #[test]
    fn test_normalize_email_is_deterministic() {
        let once = normalize_email("Bob@Mail.Example");
        assert_eq!(normalize_email(&once), once);
    }

    #[test]
    fn test_capabilities() {
        let regular = Capabilities {
            is_active: true,
            is_staff: false,
            is_superuser: false,
        };
        assert!(regular.can_authenticate());
        assert!(!regular.can_access_admin());
        assert!(!regular.has_all_permissions());

        let admin = Capabilities {
            is_active: true,
            is_staff: true,
            is_superuser: true,
        };
        assert!(admin.can_access_admin());
        assert!(admin.has_all_permissions());

        let disabled_admin = Capabilities {
            is_active: false,
            ..admin
        };
        assert!(!disabled_admin.can_authenticate());
        assert!(!disabled_admin.can_access_admin());
        assert!(!disabled_admin.has_all_permissions());
    }

    #[tokio::test]
    async fn test_create_user_requires_email() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_user(&db, "", Some("pw"), UserFields::default()).await;
        assert!(matches!(result, Err(Error::MissingEmail)));

        let result = create_user(&db, "   ", Some("pw"), UserFields::default()).await;
        assert!(matches!(result, Err(Error::MissingEmail)));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let user = create_user(&db, "a@B.com", Some("hunter2"), test_user_fields("+10000000001"))
            .await?;

        assert_eq!(user.email, "a@b.com");
        assert_ne!(user.password, "hunter2");
        assert!(user.is_active);
        assert!(!user.is_staff);
        assert!(!user.is_superuser);
        assert!(user.last_login.is_none());
        assert!(check_password(&user, "hunter2")?);
        assert!(!check_password(&user, "hunter3")?);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_without_password_is_unusable() -> Result<()> {
        let db = setup_test_db().await?;

        let user = create_user(&db, "nopw@shop.test", None, test_user_fields("+10000000002"))
            .await?;
        assert!(!check_password(&user, "")?);
        assert!(!check_password(&user, &user.password.clone())?);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() -> Result<()> {
        let db = setup_test_db().await?;

        create_user(&db, "dup@shop.test", None, test_user_fields("+10000000003")).await?;
        let result =
            create_user(&db, "dup@SHOP.test", None, test_user_fields("+10000000004")).await;
        assert!(matches!(result, Err(Error::Conflict { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_duplicate_phone() -> Result<()> {
        let db = setup_test_db().await?;

        create_user(&db, "one@shop.test", None, test_user_fields("+10000000005")).await?;
        let result = create_user(&db, "two@shop.test", None, test_user_fields("+10000000005")).await;
        assert!(matches!(result, Err(Error::Conflict { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_superuser_defaults() -> Result<()> {
        let db = setup_test_db().await?;

        let admin =
            create_superuser(&db, "root@shop.test", Some("pw"), test_user_fields("+10000000006"))
                .await?;
        assert!(admin.is_staff);
        assert!(admin.is_superuser);
        assert!(Capabilities::from(&admin).has_all_permissions());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_superuser_respects_overrides() -> Result<()> {
        let db = setup_test_db().await?;

        let fields = UserFields {
            is_superuser: Some(false),
            ..test_user_fields("+10000000007")
        };
        let staff = create_superuser(&db, "staff@shop.test", None, fields).await?;
        assert!(staff.is_staff);
        assert!(!staff.is_superuser);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_by_natural_key() -> Result<()> {
        let db = setup_test_db().await?;

        let created =
            create_user(&db, "Key@Shop.Test", None, test_user_fields("+10000000008")).await?;

        let found = get_by_natural_key(&db, "Key@shop.test").await?;
        assert_eq!(found.user_id, created.user_id);

        let found = get_by_natural_key(&db, "  Key@SHOP.TEST ").await?;
        assert_eq!(found.user_id, created.user_id);

        let missing = get_by_natural_key(&db, "nobody@shop.test").await;
        assert!(matches!(missing, Err(Error::NotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_authenticate() -> Result<()> {
        let db = setup_test_db().await?;

        let user =
            create_user(&db, "login@shop.test", Some("open sesame"), test_user_fields("+10000000009"))
                .await?;

        assert!(authenticate(&db, "login@shop.test", "wrong").await?.is_none());
        assert!(authenticate(&db, "ghost@shop.test", "open sesame").await?.is_none());

        let logged_in = authenticate(&db, "login@SHOP.test", "open sesame")
            .await?
            .unwrap();
        assert_eq!(logged_in.user_id, user.user_id);
        assert!(logged_in.last_login.is_some());

        set_active(&db, user.user_id, false).await?;
        assert!(authenticate(&db, "login@shop.test", "open sesame").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_set_password() -> Result<()> {
        let db = setup_test_db().await?;

        let user = create_user(&db, "pw@shop.test", Some("old"), test_user_fields("+10000000010"))
            .await?;
        let user = set_password(&db, user.user_id, Some("new")).await?;
        assert!(check_password(&user, "new")?);
        assert!(!check_password(&user, "old")?);

        let user = set_password(&db, user.user_id, None).await?;
        assert!(!check_password(&user, "new")?);

        let missing = set_password(&db, Uuid::new_v4(), Some("x")).await;
        assert!(matches!(missing, Err(Error::NotFound { .. })));

        Ok(())
    }
}
