use sqlx::FromRow;

use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::new(self.id, self.name, self.email)
    }
}
