pub(crate) mod client;
pub(crate) mod request;
pub(crate) mod response;

pub use client::{ResponsesClient, ResponsesProviderConfig};
pub use request::Request;
pub use response::{
    IncompleteDetails, MessageContent, OutputItem, OutputMessage, OutputText, Refusal, Response,
    ResponseError, Status, Usage,
};
