//! Member model -> entity mapper

use campus_core::entities::Member;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: model.id,
            name: model.name,
            role: model.role,
            contact: model.contact,
            photo_url: model.photo_url,
            created_at: model.created_at,
        }
    }
}
