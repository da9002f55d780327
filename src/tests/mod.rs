
use crate::core::models::user::User;
use crate::core::services::ProbeService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use chrono::Utc;
use uuid::Uuid;

pub fn sample_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$saltsaltsaltsaltsaltsuhashhashhashhashhashhashhashhash".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub async fn create_test_service(users: Vec<User>) -> ProbeService<InMemoryStorage> {
    let storage = InMemoryStorage::new();
    for user in users {
        storage.insert_user(user).await;
    }
    ProbeService::new(storage)
}
