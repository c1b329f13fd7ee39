pub mod model;
pub mod sql;
pub mod templates;

use wasm_bindgen::prelude::*;

use model::ErdModel;
use sql::{generate_sql, parse_sql, Dialect};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Parse SQL CREATE TABLE statements into an ERD model, returned as JSON.
#[wasm_bindgen(js_name = "parseSql")]
pub fn parse_sql_json(sql: &str) -> Result<String, String> {
    let model = parse_sql(sql).map_err(|e| e.to_string())?;
    serde_json::to_string(&model).map_err(|e| e.to_string())
}

/// Generate SQL DDL from an ERD model given as JSON.
#[wasm_bindgen(js_name = "generateSql")]
pub fn generate_sql_json(model_json: &str, dialect: Option<String>) -> Result<String, String> {
    let model: ErdModel =
        serde_json::from_str(model_json).map_err(|e| e.to_string())?;
    let dialect = dialect
        .as_deref()
        .and_then(Dialect::from_str)
        .unwrap_or_default();
    Ok(generate_sql(&model, dialect))
}

/// Look up a predefined schema template, returned as JSON.
#[wasm_bindgen(js_name = "schemaTemplate")]
pub fn schema_template_json(name: &str) -> Result<String, String> {
    let model = templates::template(name).ok_or_else(|| format!("unknown template: {name}"))?;
    serde_json::to_string(&model).map_err(|e| e.to_string())
}
