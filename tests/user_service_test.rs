//! User service tests against an in-memory SQLite database.

use std::sync::Arc;

use user_management::config::{Config, PASSWORD_MASK, STATUS_ACTIVE, STATUS_INACTIVE};
use user_management::domain::{AddressInput, CreateUser, UpdateUser};
use user_management::errors::AppError;
use user_management::infra::{Database, Persistence};
use user_management::services::{AddressManager, AddressService, UserManager, UserService};

async fn persistence() -> Arc<Persistence> {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };
    let database = Database::connect(&config).await.unwrap();
    Arc::new(Persistence::new(database.pool()))
}

fn create_request(user_name: &str) -> CreateUser {
    CreateUser {
        user_name: user_name.to_string(),
        user_password: "p1".to_string(),
        user_phone_number: "1234567890".to_string(),
        status: Some(STATUS_ACTIVE.to_string()),
        addresses: vec![],
    }
}

fn address(full_address: &str, address_type: &str) -> AddressInput {
    AddressInput {
        full_address: full_address.to_string(),
        address_type: Some(address_type.to_string()),
    }
}

fn update_request(user_name: &str, status: &str) -> UpdateUser {
    UpdateUser {
        user_name: user_name.to_string(),
        user_password: "n3wP4ss".to_string(),
        user_phone_number: "0987654321".to_string(),
        status: status.to_string(),
    }
}

#[tokio::test]
async fn test_create_user_without_addresses() {
    let users = UserManager::new(persistence().await);

    let created = users.create_user(create_request("alice")).await.unwrap();

    assert!(created.user_id > 0);
    assert_eq!(created.user_name, "alice");
    assert_eq!(created.user_password, PASSWORD_MASK);
    assert_eq!(created.status, STATUS_ACTIVE);
    assert!(created.addresses.is_empty());
}

#[tokio::test]
async fn test_create_user_defaults_status() {
    let users = UserManager::new(persistence().await);

    let request = CreateUser {
        status: None,
        ..create_request("bob")
    };
    let created = users.create_user(request).await.unwrap();

    assert_eq!(created.status, STATUS_ACTIVE);
}

#[tokio::test]
async fn test_create_user_links_addresses() {
    let uow = persistence().await;
    let users = UserManager::new(uow.clone());
    let addresses = AddressManager::new(uow);

    let request = CreateUser {
        addresses: vec![address("1 Home Lane", "HOME"), address("2 Work Street", "OFFICE")],
        ..create_request("carol")
    };
    let created = users.create_user(request).await.unwrap();

    assert_eq!(created.addresses.len(), 2);
    assert!(created
        .addresses
        .iter()
        .all(|a| a.user_id == created.user_id && a.address_id > 0));

    let stored = addresses
        .list_addresses_by_user(created.user_id)
        .await
        .unwrap();
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn test_duplicate_user_name_is_conflict() {
    let uow = persistence().await;
    let users = UserManager::new(uow.clone());
    let addresses = AddressManager::new(uow);

    users.create_user(create_request("alice")).await.unwrap();

    let duplicate = CreateUser {
        addresses: vec![address("3 Nowhere", "OTHER")],
        ..create_request("alice")
    };
    let err = users.create_user(duplicate).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Username already exists");

    // Nothing from the failed request was committed
    assert_eq!(users.list_users().await.unwrap().len(), 1);
    assert!(addresses.list_addresses().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_user_shows_mask() {
    let users = UserManager::new(persistence().await);
    let created = users.create_user(create_request("dave")).await.unwrap();

    let fetched = users.get_user(created.user_id).await.unwrap();

    assert_eq!(fetched.user_password, PASSWORD_MASK);
    assert_eq!(fetched.date_of_registration, created.date_of_registration);
}

#[tokio::test]
async fn test_get_missing_user() {
    let users = UserManager::new(persistence().await);

    let err = users.get_user(12345).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(msg) if msg == "User not found with id: 12345"));
}

#[tokio::test]
async fn test_update_user_overwrites_fields() {
    let users = UserManager::new(persistence().await);
    let request = CreateUser {
        addresses: vec![address("1 Home Lane", "HOME")],
        ..create_request("erin")
    };
    let created = users.create_user(request).await.unwrap();

    let updated = users
        .update_user(created.user_id, update_request("erin2", STATUS_INACTIVE))
        .await
        .unwrap();

    assert_eq!(updated.user_id, created.user_id);
    assert_eq!(updated.user_name, "erin2");
    assert_eq!(updated.user_phone_number, "0987654321");
    assert_eq!(updated.status, STATUS_INACTIVE);
    assert_eq!(updated.user_password, PASSWORD_MASK);
    assert_eq!(updated.date_of_registration, created.date_of_registration);
    assert_eq!(updated.addresses, created.addresses);
}

#[tokio::test]
async fn test_update_to_own_name_succeeds() {
    let users = UserManager::new(persistence().await);
    let created = users.create_user(create_request("frank")).await.unwrap();

    let updated = users
        .update_user(created.user_id, update_request("frank", STATUS_ACTIVE))
        .await
        .unwrap();

    assert_eq!(updated.user_name, "frank");
}

#[tokio::test]
async fn test_update_to_taken_name_is_conflict() {
    let users = UserManager::new(persistence().await);
    users.create_user(create_request("grace")).await.unwrap();
    let heidi = users.create_user(create_request("heidi")).await.unwrap();

    let err = users
        .update_user(heidi.user_id, update_request("grace", STATUS_ACTIVE))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(users.get_user(heidi.user_id).await.unwrap().user_name, "heidi");
}

#[tokio::test]
async fn test_update_missing_user() {
    let users = UserManager::new(persistence().await);

    let err = users
        .update_user(77, update_request("nobody", STATUS_ACTIVE))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_user_removes_addresses() {
    let uow = persistence().await;
    let users = UserManager::new(uow.clone());
    let addresses = AddressManager::new(uow);

    let request = CreateUser {
        addresses: vec![address("1 Home Lane", "HOME"), address("2 Work Street", "OFFICE")],
        ..create_request("ivan")
    };
    let created = users.create_user(request).await.unwrap();
    let kept = users
        .create_user(CreateUser {
            addresses: vec![address("9 Other Road", "HOME")],
            ..create_request("judy")
        })
        .await
        .unwrap();

    users.delete_user(created.user_id).await.unwrap();

    assert!(addresses
        .list_addresses_by_user(created.user_id)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        addresses.list_addresses_by_user(kept.user_id).await.unwrap().len(),
        1
    );
    assert!(matches!(
        users.get_user(created.user_id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_missing_user() {
    let users = UserManager::new(persistence().await);

    let err = users.delete_user(5).await.unwrap_err();

    assert_eq!(err.to_string(), "User not found with id: 5");
}

#[tokio::test]
async fn test_list_users_by_status() {
    let users = UserManager::new(persistence().await);
    users.create_user(create_request("kim")).await.unwrap();
    users.create_user(create_request("lee")).await.unwrap();
    users
        .create_user(CreateUser {
            status: Some(STATUS_INACTIVE.to_string()),
            ..create_request("max")
        })
        .await
        .unwrap();

    let active = users.list_users_by_status(STATUS_ACTIVE).await.unwrap();
    let inactive = users.list_users_by_status(STATUS_INACTIVE).await.unwrap();
    let lowercase = users.list_users_by_status("active").await.unwrap();

    assert_eq!(active.len(), 2);
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].user_name, "max");
    assert!(lowercase.is_empty());
}

#[tokio::test]
async fn test_list_users_attaches_each_users_addresses() {
    let users = UserManager::new(persistence().await);
    users
        .create_user(CreateUser {
            addresses: vec![address("1 A Street", "HOME"), address("2 A Street", "OFFICE")],
            ..create_request("nina")
        })
        .await
        .unwrap();
    users.create_user(create_request("omar")).await.unwrap();

    let listed = users.list_users().await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].user_name, "nina");
    assert_eq!(listed[0].addresses.len(), 2);
    assert!(listed[1].addresses.is_empty());
}

#[tokio::test]
async fn test_listing_more_users_than_sqlite_bind_limit() {
    use sea_orm::ConnectionTrait;

    const BULK_USERS: i32 = 40_000;

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };
    let database = Database::connect(&config).await.unwrap();
    let users = UserManager::new(Arc::new(Persistence::new(database.pool())));

    let mut template = create_request("template");
    template.addresses = vec![address("1 Template Row", "HOME")];
    users.create_user(template).await.unwrap();

    database
        .pool()
        .execute_unprepared(&format!(
            "INSERT INTO user_master \
                 (user_name, user_password, user_phone_number, date_of_registration, status) \
             WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < {}) \
             SELECT 'bulk' || n, t.user_password, t.user_phone_number, \
                    t.date_of_registration, t.status \
             FROM seq, user_master t WHERE t.user_name = 'template'",
            BULK_USERS
        ))
        .await
        .unwrap();

    let expected = BULK_USERS as usize + 1;

    let all = users.list_users().await.unwrap();
    assert_eq!(all.len(), expected);
    assert_eq!(all[0].user_name, "template");
    assert_eq!(all[0].addresses.len(), 1);
    assert!(all[1..].iter().all(|u| u.addresses.is_empty()));

    let active = users.list_users_by_status(STATUS_ACTIVE).await.unwrap();
    assert_eq!(active.len(), expected);
    assert_eq!(active[0].addresses[0].full_address, "1 Template Row");
}
