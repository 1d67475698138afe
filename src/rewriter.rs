use crate::locator::Locator;
use crate::{Result, RewriteError};
use regex::Regex;
use std::sync::OnceLock;

const SORT_ALIAS: &str = "dctrn_ver";
const SORT_EXPR: &str = "@@version";

pub struct Rewriter {}

impl Rewriter {
    /// Restricts a SELECT statement to a page of rows using
    /// `OFFSET n ROWS FETCH NEXT m ROWS ONLY`. A query without a trailing
    /// ORDER BY gets a synthetic sort column projected into its select list,
    /// since the server rejects OFFSET/FETCH on unordered queries.
    pub fn rewrite(sql: &str, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
        if limit.is_none() && offset.is_none() {
            return Ok(sql.to_string());
        }

        let mut query = sql.to_string();

        if !trailing_order_by().is_match(&query) {
            let from = Locator::find_outer_from(&query, 0)
                .ok_or_else(|| RewriteError::MissingOuterFrom(sql.to_string()))?;

            query.push_str(&format!(" ORDER BY {}", SORT_ALIAS));
            query.insert_str(from, &format!(", {} as {}", SORT_EXPR, SORT_ALIAS));
        }

        if let Some(offset) = offset {
            query.push_str(&format!(" OFFSET {} ROWS", offset));
            if let Some(limit) = limit {
                query.push_str(&format!(" FETCH NEXT {} ROWS ONLY", limit));
            }
        } else if let Some(limit) = limit {
            // FETCH NEXT is invalid without an OFFSET clause, so skip zero rows
            query.push_str(&format!(" OFFSET 0 ROWS FETCH NEXT {} ROWS ONLY", limit));
        }

        log::trace!("Rewrite query '{}' -> '{}'", sql, query);

        Ok(query)
    }
}

// Matches an ORDER BY anchored at the end of the statement: one or more
// comma-separated items, each an identifier/number/bracket/dot run or a
// single `ident(...)` call. Anything fancier (CASE WHEN, arithmetic) is not
// recognized and falls through to the synthetic sort column.
fn trailing_order_by() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)ORDER BY ([a-z0-9.\[\], \t_]|[a-z_]+\([a-z0-9.\[\], \t_]+\))+\s*$")
            .expect("Invalid regex pattern")
    })
}
