const NEEDLE: &[u8] = b" from ";

pub struct Locator {}

impl Locator {
    /// Byte position of the next ` from ` token sitting at parenthesis depth
    /// zero, at or after `start`. Parentheses and keywords inside
    /// single-quoted literals do not count.
    pub fn find_outer_from(sql: &str, start: usize) -> Option<usize> {
        let bytes = sql.as_bytes();
        let mut depth: i32 = 0;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\'' => {
                    // Skip the literal; '' is an escaped quote, not a terminator
                    i += 1;
                    while i < bytes.len() {
                        if bytes[i] == b'\'' {
                            if bytes.get(i + 1) == Some(&b'\'') {
                                i += 2;
                                continue;
                            }
                            break;
                        }
                        i += 1;
                    }
                }
                b'(' => depth += 1,
                b')' => depth -= 1,
                _ => {
                    if depth == 0
                        && i >= start
                        && bytes[i..].len() >= NEEDLE.len()
                        && bytes[i..i + NEEDLE.len()].eq_ignore_ascii_case(NEEDLE)
                    {
                        return Some(i);
                    }
                }
            }
            i += 1;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::Locator;

    #[test]
    fn finds_top_level_from() {
        assert_eq!(Locator::find_outer_from("SELECT * FROM user", 0), Some(8));
        assert_eq!(Locator::find_outer_from("select * from user", 0), Some(8));
    }

    #[test]
    fn derived_table_keeps_the_introducing_from() {
        let sql = "SELECT * FROM (SELECT a FROM b) x";
        assert_eq!(Locator::find_outer_from(sql, 0), Some(8));
    }

    #[test]
    fn skips_from_inside_select_list_subquery() {
        let sql = "SELECT (SELECT COUNT(*) FROM login l WHERE l.profile_id = p.id) login_count FROM profile p";
        assert_eq!(Locator::find_outer_from(sql, 0), sql.rfind(" FROM "));
    }

    #[test]
    fn from_like_column_names_are_not_the_keyword() {
        let sql = "SELECT a.fromFoo, fromBar FROM foo";
        assert_eq!(Locator::find_outer_from(sql, 0), sql.find(" FROM "));
    }

    #[test]
    fn literals_are_opaque() {
        let sql = "SELECT ') from (' FROM t";
        assert_eq!(Locator::find_outer_from(sql, 0), sql.find(" FROM t"));

        // Doubled quote stays inside the literal
        let sql = "SELECT 'it''s ( from ' FROM t";
        assert_eq!(Locator::find_outer_from(sql, 0), sql.find(" FROM t"));
    }

    #[test]
    fn start_offset_skips_earlier_matches() {
        let sql = "SELECT * FROM user";
        assert_eq!(Locator::find_outer_from(sql, 8), Some(8));
        assert_eq!(Locator::find_outer_from(sql, 9), None);
    }

    #[test]
    fn not_found_without_unnested_from() {
        assert_eq!(Locator::find_outer_from("SELECT 1", 0), None);
        assert_eq!(
            Locator::find_outer_from("SELECT (SELECT MAX(id) FROM user)", 0),
            None
        );
    }
}
