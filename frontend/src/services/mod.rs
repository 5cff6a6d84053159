pub mod chat_transcript;
pub mod navigation;
pub mod selection;
pub mod upload_flow;
