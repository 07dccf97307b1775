use common::{
    context::Context,
    entities::submission::{CreateSubmission, Submission},
};

use crate::error::{self, Error};

pub struct FormService {
    pub context: Context,
}

impl FormService {
    pub fn new(context: Context) -> Self {
        Self { context }
    }

    pub async fn submit(&self, form: CreateSubmission) -> error::Result<()> {
        let result = self.submit_inner(form).await;
        match &result {
            Err(Error::Validation(err)) => log::debug!("Rejected form submission: {}", err),
            Err(err) => log::error!("Error submitting form: {}", err),
            Ok(()) => {}
        }
        result
    }

    async fn submit_inner(&self, form: CreateSubmission) -> error::Result<()> {
        let submissions = self
            .context
            .try_get_repository::<Submission>()
            .map_err(Error::Persistence)?;

        submissions
            .ensure_connected()
            .await
            .map_err(Error::Connection)?;

        let submission = form.validate()?;

        submissions
            .insert(&submission)
            .await
            .map_err(Error::Persistence)?;

        Ok(())
    }
}
