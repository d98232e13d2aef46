mod client;
mod types;

pub use client::{GeminiClient, GenerativeModel};
pub use types::{
    Blob, Candidate, CandidateContent, CandidatePart, Content, GenerateContentRequest,
    GenerateContentResponse, Part, PromptFeedback,
};
