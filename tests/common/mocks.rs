use async_trait::async_trait;
use civil_insight::{
    Error, Result,
    gemini::{
        Candidate, CandidateContent, CandidatePart, GenerateContentRequest,
        GenerateContentResponse, GenerativeModel, PromptFeedback,
    },
};
use std::sync::{Arc, Mutex};

/// Mock generative model for testing
#[derive(Debug)]
pub struct MockGenerativeModel {
    pub responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    pub requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    pub error: Arc<Mutex<Option<String>>>,
}

impl MockGenerativeModel {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_responses(self, responses: Vec<GenerateContentResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(self, error: String) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    pub fn add_response(&self, response: GenerateContentResponse) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for MockGenerativeModel {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = *self.error.lock().unwrap() {
            return Err(Error::remote_call(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::remote_call("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockGenerativeModel {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn create_mock_analysis_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(CandidateContent {
                parts: vec![CandidatePart {
                    text: Some(text.to_string()),
                }],
            }),
            finish_reason: Some("STOP".to_string()),
        }],
        prompt_feedback: None,
    }
}

pub fn create_blocked_response(reason: &str, message: Option<&str>) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![],
        prompt_feedback: Some(PromptFeedback {
            block_reason: Some(reason.to_string()),
            block_reason_message: message.map(|m| m.to_string()),
        }),
    }
}

pub fn create_empty_response(finish_reason: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: None,
            finish_reason: Some(finish_reason.to_string()),
        }],
        prompt_feedback: None,
    }
}
