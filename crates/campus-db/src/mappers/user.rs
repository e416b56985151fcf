//! User model -> entity mapper

use campus_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            email: model.email,
            student: model.student,
            approved: model.approved,
            courses_access: model.courses_access,
            created_at: model.created_at,
        }
    }
}
