use crate::structs::grounding_chunk::GroundingChunk;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelResponse {
    pub text: String,
    pub grounding_chunks: Vec<GroundingChunk>,
}

impl ModelResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            grounding_chunks: Vec::new(),
        }
    }

    pub fn with_grounding(mut self, grounding_chunks: Vec<GroundingChunk>) -> Self {
        self.grounding_chunks = grounding_chunks;
        self
    }
}
