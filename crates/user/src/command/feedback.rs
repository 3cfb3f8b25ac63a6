use dailykitchen_shared::user::Feedback;

use crate::ProfileStore;

impl<S: ProfileStore> super::Command<S> {
    /// Returns the feedback now recorded for `name`.
    pub fn toggle(
        &mut self,
        name: &str,
        feedback: Feedback,
    ) -> dailykitchen_shared::Result<Option<Feedback>> {
        if name.trim().is_empty() {
            dailykitchen_shared::user!("dish name is required");
        }

        self.profile.toggle(name, feedback);
        self.commit()?;

        let current = self.profile.feedback_for(name);
        tracing::info!(dish = name, action = %feedback, ?current, "feedback toggled");

        Ok(current)
    }
}
