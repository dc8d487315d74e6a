#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no workspace is open")]
    NoWorkspaceOpen,

    #[error("remote call failed: {0}")]
    RemoteCallFailed(String),

    #[error("no content in response")]
    NoContentInResponse,

    #[error("file write failed: {0}")]
    FileWriteFailed(String),
}
