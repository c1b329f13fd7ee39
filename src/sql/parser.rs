//! Parser for CREATE TABLE statements.
//!
//! Best-effort by design: a malformed column fragment or a statement without
//! a recognizable CREATE TABLE yields nothing and is dropped, it never fails
//! the whole parse. Only faults in the statement splitter surface as
//! [`SqlParseError`], and then the parse is all-or-nothing.

use super::splitter::split_statements;
use crate::model::{Column, ErdModel, Relationship, Table};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlParseError {
    #[error("unterminated string literal at byte {offset}")]
    UnterminatedString { offset: usize },
    #[error("unterminated block comment at byte {offset}")]
    UnterminatedComment { offset: usize },
}

/// Parse raw SQL text into an ERD model.
pub fn parse_sql(input: &str) -> Result<ErdModel, SqlParseError> {
    let statements = split_statements(input)?;

    let mut tables = Vec::new();
    for statement in &statements {
        if statement.to_uppercase().contains("CREATE TABLE") {
            if let Some(table) = parse_create_table(statement) {
                tables.push(table);
            }
        }
    }

    let relationships = infer_relationships(&tables);

    Ok(ErdModel {
        tables,
        relationships,
    })
}

/// Parse a single CREATE TABLE statement, or `None` if it doesn't look like one.
fn parse_create_table(statement: &str) -> Option<Table> {
    let upper = statement.to_uppercase();
    let name = create_table_name(&upper)?;

    let mut columns = Vec::new();
    if let Some(body) = table_body(statement) {
        for fragment in split_column_defs(body) {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            let upper_fragment = fragment.to_uppercase();
            // Table-level constraint clauses are not column definitions
            if upper_fragment.starts_with("CONSTRAINT")
                || upper_fragment.starts_with("PRIMARY KEY")
                || upper_fragment.starts_with("FOREIGN KEY")
            {
                continue;
            }
            if let Some(column) = parse_column_def(fragment) {
                columns.push(column);
            }
        }
    }

    Some(Table {
        name,
        columns,
        position: None,
    })
}

/// Parse one column-definition fragment, or `None` if it isn't one.
fn parse_column_def(fragment: &str) -> Option<Column> {
    let mut tokens = fragment.split_whitespace();
    let name_token = tokens.next()?;
    let type_token = tokens.next()?;

    let name = name_token
        .trim_matches(|c| c == '`' || c == '"' || c == '\'')
        .to_string();
    let typ = type_token.to_uppercase();

    let upper = fragment.to_uppercase();
    let primary_key = upper.contains("PRIMARY KEY");
    let nullable = !upper.contains("NOT NULL") && !primary_key;
    let unique = upper.contains("UNIQUE");
    let foreign_key = scan_references(&upper);
    let default = scan_default(&upper);

    Some(Column {
        name,
        typ,
        nullable,
        primary_key,
        foreign_key,
        unique,
        default,
    })
}

/// Derive one relationship per foreign-key-bearing column, in table then
/// column order. No deduplication, no existence check on the referenced side.
pub fn infer_relationships(tables: &[Table]) -> Vec<Relationship> {
    let mut relationships = Vec::new();
    for table in tables {
        for column in &table.columns {
            let Some((ref_table, ref_column)) =
                column.foreign_key.as_deref().and_then(fk_parts)
            else {
                continue;
            };
            relationships.push(Relationship {
                from_table: table.name.clone(),
                from_column: column.name.clone(),
                to_table: ref_table.to_lowercase(),
                to_column: ref_column.to_lowercase(),
                relationship_type: "many-to-one".to_string(),
                cardinality: None,
            });
        }
    }
    relationships
}

/// Split a `table(column)` reference into its two tokens.
pub(crate) fn fk_parts(fk: &str) -> Option<(&str, &str)> {
    let open = fk.find('(')?;
    let table = &fk[..open];
    if table.is_empty() || !table.chars().all(is_word) {
        return None;
    }
    let rest = &fk[open + 1..];
    let close = rest.find(')')?;
    let column = &rest[..close];
    if column.is_empty() || !column.chars().all(is_word) {
        return None;
    }
    Some((table, column))
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find `CREATE TABLE <identifier>` in an upper-cased statement and return
/// the identifier, lower-cased.
fn create_table_name(upper: &str) -> Option<String> {
    let mut rest = upper;
    loop {
        let idx = rest.find("CREATE")?;
        let tail = &rest[idx + "CREATE".len()..];
        rest = tail;

        let after_create = tail.trim_start();
        if after_create.len() == tail.len() {
            continue;
        }
        let Some(after_table) = after_create.strip_prefix("TABLE") else {
            continue;
        };
        let name_start = after_table.trim_start();
        if name_start.len() == after_table.len() {
            continue;
        }
        let name: String = name_start.chars().take_while(|&c| is_word(c)).collect();
        if !name.is_empty() {
            return Some(name.to_lowercase());
        }
    }
}

/// Text between the first `(` and its matching `)`, tracking nesting depth
/// and skipping string literals.
fn table_body(statement: &str) -> Option<&str> {
    let open = statement.find('(')?;
    let mut depth = 0usize;
    let mut in_string = false;
    for (i, c) in statement[open..].char_indices() {
        match c {
            '\'' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&statement[open + 1..open + i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a table body on top-level commas, so `DECIMAL(10,2)` stays whole.
fn split_column_defs(body: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut start = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '\'' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string && depth > 0 => depth -= 1,
            ',' if !in_string && depth == 0 => {
                fragments.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fragments.push(&body[start..]);
    fragments
}

/// Scan an upper-cased fragment for `REFERENCES <ident>(<ident>)` and return
/// the canonical `TABLE(COLUMN)` form.
fn scan_references(upper: &str) -> Option<String> {
    let mut rest = upper;
    loop {
        let idx = rest.find("REFERENCES")?;
        let tail = &rest[idx + "REFERENCES".len()..];
        rest = tail;

        let table_start = tail.trim_start();
        if table_start.len() == tail.len() {
            continue;
        }
        let table: String = table_start.chars().take_while(|&c| is_word(c)).collect();
        if table.is_empty() {
            continue;
        }
        let after_table = table_start[table.len()..].trim_start();
        let Some(paren_body) = after_table.strip_prefix('(') else {
            continue;
        };
        let column: String = paren_body.chars().take_while(|&c| is_word(c)).collect();
        if column.is_empty() || !paren_body[column.len()..].starts_with(')') {
            continue;
        }
        return Some(format!("{table}({column})"));
    }
}

/// Scan an upper-cased fragment for `DEFAULT <value>`; the value is the run
/// of non-comma non-whitespace characters after the keyword, so quoted
/// defaults containing spaces are truncated at the first embedded space.
fn scan_default(upper: &str) -> Option<String> {
    let mut rest = upper;
    loop {
        let idx = rest.find("DEFAULT")?;
        let tail = &rest[idx + "DEFAULT".len()..];
        rest = tail;

        let value_start = tail.trim_start();
        if value_start.len() == tail.len() {
            continue;
        }
        let value: String = value_start
            .chars()
            .take_while(|&c| !c.is_whitespace() && c != ',')
            .collect();
        if !value.is_empty() {
            return Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_table() {
        let sql = "CREATE TABLE t (id INTEGER PRIMARY KEY, name VARCHAR(255) NOT NULL)";

        let model = parse_sql(sql).unwrap();
        assert_eq!(model.tables.len(), 1);
        assert_eq!(model.relationships.len(), 0);

        let table = &model.tables[0];
        assert_eq!(table.name, "t");
        assert_eq!(table.columns.len(), 2);

        let id = &table.columns[0];
        assert_eq!(id.name, "id");
        assert_eq!(id.typ, "INTEGER");
        assert!(id.primary_key);
        assert!(!id.nullable);

        let name = &table.columns[1];
        assert_eq!(name.name, "name");
        assert_eq!(name.typ, "VARCHAR(255)");
        assert!(!name.nullable);
        assert!(!name.primary_key);
    }

    #[test]
    fn test_table_name_lower_cased() {
        let model = parse_sql("CREATE TABLE Users (id INT)").unwrap();
        assert_eq!(model.tables[0].name, "users");
    }

    #[test]
    fn test_foreign_key_captured_upper_cased() {
        let sql = r#"
            CREATE TABLE users (id INTEGER PRIMARY KEY);
            CREATE TABLE orders (
                id INTEGER PRIMARY KEY,
                user_id INTEGER NOT NULL REFERENCES users(id)
            );
        "#;

        let model = parse_sql(sql).unwrap();
        assert_eq!(model.tables.len(), 2);

        let user_id = &model.tables[1].columns[1];
        assert_eq!(user_id.foreign_key.as_deref(), Some("USERS(ID)"));

        assert_eq!(model.relationships.len(), 1);
        let rel = &model.relationships[0];
        assert_eq!(rel.from_table, "orders");
        assert_eq!(rel.from_column, "user_id");
        assert_eq!(rel.to_table, "users");
        assert_eq!(rel.to_column, "id");
        assert_eq!(rel.relationship_type, "many-to-one");
        assert_eq!(rel.cardinality, None);
    }

    #[test]
    fn test_relationship_to_missing_table_still_emitted() {
        let sql = "CREATE TABLE orders (user_id INT REFERENCES users(id))";
        let model = parse_sql(sql).unwrap();

        // No validation against the parsed table set
        assert_eq!(model.relationships.len(), 1);
        assert_eq!(model.relationships[0].to_table, "users");
    }

    #[test]
    fn test_short_fragment_is_dropped_silently() {
        let sql = "CREATE TABLE t (id INTEGER, )";
        let model = parse_sql(sql).unwrap();

        assert_eq!(model.tables[0].columns.len(), 1);
        assert_eq!(model.tables[0].columns[0].name, "id");
    }

    #[test]
    fn test_decimal_precision_survives_comma_split() {
        let sql = "CREATE TABLE t (amount DECIMAL(10,2) NOT NULL, qty INT)";
        let model = parse_sql(sql).unwrap();

        let table = &model.tables[0];
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].typ, "DECIMAL(10,2)");
        assert!(!table.columns[0].nullable);
        assert_eq!(table.columns[1].name, "qty");
    }

    #[test]
    fn test_table_level_constraints_dropped() {
        let sql = r#"
            CREATE TABLE memberships (
                user_id INTEGER,
                group_id INTEGER,
                PRIMARY KEY (user_id, group_id),
                FOREIGN KEY (user_id) REFERENCES users(id),
                CONSTRAINT uq_pair UNIQUE (user_id, group_id)
            )
        "#;

        let model = parse_sql(sql).unwrap();
        let table = &model.tables[0];
        assert_eq!(table.columns.len(), 2);
        // Table-level FK clauses are not modeled, so no relationship either
        assert_eq!(model.relationships.len(), 0);
    }

    #[test]
    fn test_quoted_column_name_stripped() {
        let sql = "CREATE TABLE t (`id` INT, \"Name\" VARCHAR(40))";
        let model = parse_sql(sql).unwrap();

        let table = &model.tables[0];
        assert_eq!(table.columns[0].name, "id");
        assert_eq!(table.columns[1].name, "Name");
    }

    #[test]
    fn test_default_value_captured() {
        let sql = "CREATE TABLE t (created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP, n INT DEFAULT 0)";
        let model = parse_sql(sql).unwrap();

        let table = &model.tables[0];
        assert_eq!(table.columns[0].default.as_deref(), Some("CURRENT_TIMESTAMP"));
        assert_eq!(table.columns[1].default.as_deref(), Some("0"));
    }

    #[test]
    fn test_default_truncated_at_whitespace() {
        // Captured from the upper-cased scan, cut at the first space
        let sql = "CREATE TABLE t (status VARCHAR(20) DEFAULT 'new value')";
        let model = parse_sql(sql).unwrap();

        assert_eq!(model.tables[0].columns[0].default.as_deref(), Some("'NEW"));
    }

    #[test]
    fn test_unique_column() {
        let sql = "CREATE TABLE t (email VARCHAR(255) UNIQUE NOT NULL)";
        let model = parse_sql(sql).unwrap();

        let email = &model.tables[0].columns[0];
        assert!(email.unique);
        assert!(!email.nullable);
        assert!(!email.primary_key);
    }

    #[test]
    fn test_statement_without_create_table_ignored() {
        let sql = "INSERT INTO t VALUES (1); SELECT * FROM t;";
        let model = parse_sql(sql).unwrap();

        assert!(model.tables.is_empty());
        assert!(model.relationships.is_empty());
    }

    #[test]
    fn test_mixed_case_keywords() {
        let sql = "create table Orders (ID integer primary key, Total decimal(8,2))";
        let model = parse_sql(sql).unwrap();

        let table = &model.tables[0];
        assert_eq!(table.name, "orders");
        assert_eq!(table.columns[0].name, "ID");
        assert!(table.columns[0].primary_key);
        assert_eq!(table.columns[1].typ, "DECIMAL(8,2)");
    }

    #[test]
    fn test_trailing_parens_after_body() {
        // Depth matching must stop at the body's own closing paren
        let sql = "CREATE TABLE t (id INT) -- note (ignore)\n;";
        let model = parse_sql(sql).unwrap();

        assert_eq!(model.tables[0].columns.len(), 1);
        assert_eq!(model.tables[0].columns[0].name, "id");
    }

    #[test]
    fn test_create_table_without_body_keeps_empty_table() {
        let model = parse_sql("CREATE TABLE marker").unwrap();

        assert_eq!(model.tables.len(), 1);
        assert_eq!(model.tables[0].name, "marker");
        assert!(model.tables[0].columns.is_empty());
    }

    #[test]
    fn test_fk_parts() {
        assert_eq!(fk_parts("USERS(ID)"), Some(("USERS", "ID")));
        assert_eq!(fk_parts("users(id) extra"), Some(("users", "id")));
        assert_eq!(fk_parts("users"), None);
        assert_eq!(fk_parts("(id)"), None);
        assert_eq!(fk_parts("bad name(id)"), None);
    }
}
