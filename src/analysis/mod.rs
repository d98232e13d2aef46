mod image;
mod prompt;

pub use image::{ACCEPTED_MIME_TYPES, FileUpload, UploadedImage};
pub use prompt::STRUCTURAL_ANALYSIS_PROMPT;

use crate::{
    Error, Result,
    config::GeminiConfig,
    gemini::{GeminiClient, GenerateContentRequest, GenerativeModel, Part},
};
use tracing::debug;

/// Runs structure analyses against a generative model.
pub struct Analyst {
    model: Box<dyn GenerativeModel>,
}

impl Analyst {
    pub fn new(model: Box<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub fn from_config(config: GeminiConfig) -> Self {
        Self::new(Box::new(GeminiClient::new(config)))
    }

    /// Sends one analysis request and returns the report text.
    pub async fn analyze(&self, instruction: &str, image: &UploadedImage) -> Result<String> {
        debug!(
            "Requesting analysis for a {} image of {} bytes",
            image.mime_type,
            image.data.len()
        );

        let request = assemble_request(instruction, image);
        let response = self.model.generate_content(request).await?;

        // Blocked prompts come back as HTTP 200 with feedback instead of
        // candidates.
        if let Some(ref feedback) = response.prompt_feedback {
            if let Some(ref reason) = feedback.block_reason {
                let message = feedback
                    .block_reason_message
                    .clone()
                    .unwrap_or_else(|| format!("prompt blocked: {reason}"));
                return Err(Error::remote_call(message));
            }
        }

        match response.text() {
            Some(text) => Ok(text),
            None => {
                let reason = response
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.clone())
                    .unwrap_or_else(|| "no candidates".to_string());
                Err(Error::remote_call(format!(
                    "response contained no analysis text ({reason})"
                )))
            }
        }
    }
}

/// Builds the wire request for one submission: the free-text instruction
/// first, then the image, then the fixed task prompt.
pub fn assemble_request(instruction: &str, image: &UploadedImage) -> GenerateContentRequest {
    GenerateContentRequest::from_parts(vec![
        Part::text(instruction),
        Part::inline_data(image.mime_type.clone(), &image.data),
        Part::text(STRUCTURAL_ANALYSIS_PROMPT),
    ])
}
