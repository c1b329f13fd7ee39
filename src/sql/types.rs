//! Type translation for PostgreSQL output.

/// Translate a stored type token to its PostgreSQL rendering.
///
/// The lookup is fixed: integer primary keys become `SERIAL`, exact
/// `DECIMAL` becomes `NUMERIC`, `DECIMAL(p,s)` keeps its precision with the
/// keyword swapped, `VARCHAR(n)` passes through, and anything unknown is
/// emitted unchanged.
pub fn postgres_type(raw: &str, primary_key: bool) -> String {
    let upper = raw.to_uppercase();
    match upper.as_str() {
        "INTEGER" | "INT" => {
            if primary_key {
                "SERIAL".to_string()
            } else {
                "INTEGER".to_string()
            }
        }
        "TIMESTAMP" | "DATETIME" => "TIMESTAMP WITH TIME ZONE".to_string(),
        "BOOLEAN" | "BOOL" => "BOOLEAN".to_string(),
        "DECIMAL" => "NUMERIC".to_string(),
        "FLOAT" => "REAL".to_string(),
        "DOUBLE" => "DOUBLE PRECISION".to_string(),
        _ if upper.starts_with("VARCHAR") => raw.to_string(),
        _ if upper.starts_with("DECIMAL") => upper.replacen("DECIMAL", "NUMERIC", 1),
        _ => raw.to_string(),
    }
}
