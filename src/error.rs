use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "ellipsis width {ellipsis_width} leaves no visible text within a limit of {visible_limit}"
    )]
    EllipsisTooWide {
        ellipsis_width: usize,
        visible_limit: usize,
    },

    #[error("{0} must not be a backtick")]
    BacktickMarker(&'static str),

    #[cfg(feature = "payload")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
