use validator::Validate;

use crate::ProfileStore;

#[derive(Validate)]
pub struct SetNicknameInput {
    #[validate(length(min = 1, max = 20))]
    pub nickname: String,
}

impl<S: ProfileStore> super::Command<S> {
    pub fn set_nickname(&mut self, input: SetNicknameInput) -> dailykitchen_shared::Result<()> {
        let input = SetNicknameInput {
            nickname: input.nickname.trim().to_owned(),
        };
        input.validate()?;

        self.profile.nickname = input.nickname;
        self.commit()
    }
}
