use async_trait::async_trait;

use crate::domain::recognition::errors::RecognitionError;
use crate::domain::recognition::model::RecognitionOutcome;

pub struct RecognizeProductParams {
    pub image: Vec<u8>,
}

#[async_trait]
pub trait RecognizeProductUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecognizeProductParams,
    ) -> Result<RecognitionOutcome, RecognitionError>;
}
