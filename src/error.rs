use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// Paging requires an ORDER BY injection, but the query has no FROM
    /// clause at its top nesting level to anchor the synthetic column on.
    #[error("no outer FROM clause found in query '{0}'")]
    MissingOuterFrom(String),
}
